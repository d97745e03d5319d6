use std::cmp::Ordering;
use std::fmt;

use crate::reduce::Error;

/// Content-addressed identity of a charge pattern.
///
/// Each site charge is stored as a zig-zag LEB128 varint, in site order, so the
/// encoding is compact (one byte per charge in `-64..=63`), independent of the
/// process that produced it, and losslessly reversible through [`decode`](Self::decode).
/// Identities order bytewise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChargeStateId(Box<[u8]>);

impl ChargeStateId {
    pub fn encode(charges: &[i32]) -> Self {
        let mut bytes = Vec::with_capacity(charges.len());
        for &charge in charges {
            let mut value = ((charge << 1) ^ (charge >> 31)) as u32;
            loop {
                let byte = (value & 0x7f) as u8;
                value >>= 7;
                if value == 0 {
                    bytes.push(byte);
                    break;
                }
                bytes.push(byte | 0x80);
            }
        }
        Self(bytes.into_boxed_slice())
    }

    /// Rebuilds an identity from its raw bytes, rejecting anything that is not the
    /// canonical encoding of some charge sequence.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.last().is_some_and(|b| b & 0x80 != 0) {
            return Err(Error::malformed_identity("truncated varint at end of input"));
        }
        let canonical = Self::encode(&decode_varints(bytes));
        if *canonical.0 != *bytes {
            return Err(Error::malformed_identity(
                "bytes are not a canonical charge encoding",
            ));
        }
        Ok(canonical)
    }

    /// Recovers the charge sequence, in site order.
    pub fn decode(&self) -> Vec<i32> {
        decode_varints(&self.0)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

fn decode_varints(bytes: &[u8]) -> Vec<i32> {
    let mut charges = Vec::with_capacity(bytes.len());
    let mut value: u64 = 0;
    let mut shift = 0u32;
    for &byte in bytes {
        if shift < 35 {
            value |= u64::from(byte & 0x7f) << shift;
        }
        shift = shift.saturating_add(7);
        if byte & 0x80 == 0 {
            let raw = value as u32;
            charges.push(((raw >> 1) as i32) ^ -((raw & 1) as i32));
            value = 0;
            shift = 0;
        }
    }
    charges
}

/// The capability shared by records that can be ranked against a charge state:
/// an identity, an energy, and an occurrence count.
///
/// Comparison is only defined between implementors, so comparing a charge state
/// against a record lacking any of the three is rejected at compile time.
pub trait ChargeRecord {
    fn id(&self) -> &ChargeStateId;

    /// The energy used for ranking. For a charge state this is the count-weighted
    /// average energy.
    fn energy(&self) -> f64;

    fn count(&self) -> u64;
}

/// Lexicographic comparison on `(id, energy, count)`.
///
/// Returns `None` only when the identities match and either energy is NaN.
pub fn compare<A, B>(a: &A, b: &B) -> Option<Ordering>
where
    A: ChargeRecord + ?Sized,
    B: ChargeRecord + ?Sized,
{
    match a.id().cmp(b.id()) {
        Ordering::Equal => {}
        ord => return Some(ord),
    }
    match a.energy().partial_cmp(&b.energy())? {
        Ordering::Equal => Some(a.count().cmp(&b.count())),
        ord => Some(ord),
    }
}

/// One distinct charge pattern with its aggregated statistics.
///
/// The identity is fixed at construction. `total_energy` and `count` grow while
/// samples are folded in; `average_energy` stays at zero until [`finalize`](Self::finalize)
/// derives it from the other two.
///
/// Only the reducer folds samples in, so a finalized state cannot be mutated
/// from outside the crate:
///
/// ```compile_fail
/// let mut state = crgms::ChargeState::new(&[1, 0], 4.0, 2);
/// state.finalize().unwrap();
/// state.accumulate(1.0, 1);
/// ```
#[derive(Debug, Clone)]
pub struct ChargeState {
    id: ChargeStateId,
    total_energy: f64,
    count: u64,
    average_energy: f64,
}

impl ChargeState {
    pub fn new(charges: &[i32], total_energy: f64, count: u64) -> Self {
        Self::from_id(ChargeStateId::encode(charges), total_energy, count)
    }

    pub fn from_id(id: ChargeStateId, total_energy: f64, count: u64) -> Self {
        Self {
            id,
            total_energy,
            count,
            average_energy: 0.0,
        }
    }

    /// Folds `count` more occurrences at `energy` into this state.
    pub(crate) fn accumulate(&mut self, energy: f64, count: u64) -> Result<(), Error> {
        self.absorb(energy * count as f64, count)
    }

    /// Folds another partial tally of the same pattern into this one.
    pub(crate) fn absorb(&mut self, total_energy: f64, count: u64) -> Result<(), Error> {
        self.count = self
            .count
            .checked_add(count)
            .ok_or_else(|| Error::CountOverflow {
                charges: self.charges(),
            })?;
        self.total_energy += total_energy;
        Ok(())
    }

    /// Sets `average_energy = total_energy / count` and returns it.
    ///
    /// Fails with [`Error::ZeroCount`] when no occurrences were folded in, and
    /// with [`Error::NonFiniteEnergy`] when the energy sum left the finite range.
    pub fn finalize(&mut self) -> Result<f64, Error> {
        if self.count == 0 {
            return Err(Error::ZeroCount {
                charges: self.charges(),
            });
        }
        let average = self.total_energy / self.count as f64;
        if !self.total_energy.is_finite() || !average.is_finite() {
            return Err(Error::NonFiniteEnergy {
                charges: self.charges(),
            });
        }
        self.average_energy = average;
        Ok(average)
    }

    #[inline]
    pub fn id(&self) -> &ChargeStateId {
        &self.id
    }

    /// The charge at each titratable site, decoded from the identity.
    pub fn charges(&self) -> Vec<i32> {
        self.id.decode()
    }

    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    #[inline]
    pub fn total_energy(&self) -> f64 {
        self.total_energy
    }

    #[inline]
    pub fn average_energy(&self) -> f64 {
        self.average_energy
    }
}

impl ChargeRecord for ChargeState {
    fn id(&self) -> &ChargeStateId {
        &self.id
    }

    fn energy(&self) -> f64 {
        self.average_energy
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl PartialEq for ChargeState {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for ChargeState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        compare(self, other)
    }
}

impl fmt::Display for ChargeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ChargeState(")?;
        writeln!(f, "\tcount = {},", format_count(self.count))?;
        writeln!(f, "\tE = {},", format_energy(self.average_energy))?;
        writeln!(f, "\tstate = {:?}", self.charges())?;
        write!(f, ")")
    }
}

/// Integer count with thousands separators, e.g. `1,234`.
pub fn format_count(value: u64) -> String {
    group_digits(&value.to_string())
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Two-decimal fixed point with thousands separators, e.g. `-1,234.57`.
pub fn format_energy(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{}.{frac_part}", group_digits(int_part))
}
