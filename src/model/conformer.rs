use std::collections::{BTreeMap, HashMap};

/// Resolves a conformer index to its (possibly fractional) formal charge.
pub trait ChargeLookup {
    fn charge(&self, conformer: usize) -> Option<f64>;
}

/// A structural variant of a titratable residue, as listed in a conformer table.
#[derive(Debug, Clone, PartialEq)]
pub struct Conformer {
    /// 1-based serial from the source table.
    pub iconf: usize,
    /// Conformer name, e.g. `GLU-1A0035_001`.
    pub name: String,
    pub crg: f64,
}

impl Conformer {
    pub fn new(iconf: usize, name: impl Into<String>, crg: f64) -> Self {
        Self {
            iconf,
            name: name.into(),
            crg,
        }
    }
}

/// Conformers indexed 0-based by their position in the table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConformerTable {
    pub conformers: Vec<Conformer>,
}

impl ConformerTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.conformers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.conformers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Conformer> {
        self.conformers.get(index)
    }
}

impl From<Vec<Conformer>> for ConformerTable {
    fn from(conformers: Vec<Conformer>) -> Self {
        Self { conformers }
    }
}

impl ChargeLookup for ConformerTable {
    fn charge(&self, conformer: usize) -> Option<f64> {
        self.conformers.as_slice().charge(conformer)
    }
}

impl ChargeLookup for [Conformer] {
    fn charge(&self, conformer: usize) -> Option<f64> {
        self.get(conformer).map(|c| c.crg)
    }
}

impl ChargeLookup for [f64] {
    fn charge(&self, conformer: usize) -> Option<f64> {
        self.get(conformer).copied()
    }
}

impl ChargeLookup for Vec<f64> {
    fn charge(&self, conformer: usize) -> Option<f64> {
        self.as_slice().charge(conformer)
    }
}

impl<S: std::hash::BuildHasher> ChargeLookup for HashMap<usize, f64, S> {
    fn charge(&self, conformer: usize) -> Option<f64> {
        self.get(&conformer).copied()
    }
}

impl ChargeLookup for BTreeMap<usize, f64> {
    fn charge(&self, conformer: usize) -> Option<f64> {
        self.get(&conformer).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lookup_is_positional() {
        let table = ConformerTable::from(vec![
            Conformer::new(1, "NTR01W0001_000", 0.0),
            Conformer::new(2, "NTR01W0001_001", 1.0),
            Conformer::new(3, "GLU-1A0035_001", -1.0),
        ]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.charge(0), Some(0.0));
        assert_eq!(table.charge(2), Some(-1.0));
        assert_eq!(table.charge(3), None);
    }

    #[test]
    fn map_lookups_resolve_by_key() {
        let hashed: HashMap<usize, f64> = [(10, 1.0), (20, -1.0)].into_iter().collect();
        assert_eq!(hashed.charge(20), Some(-1.0));
        assert_eq!(hashed.charge(0), None);

        let ordered: BTreeMap<usize, f64> = [(0, 0.5)].into_iter().collect();
        assert_eq!(ordered.charge(0), Some(0.5));
    }

    #[test]
    fn plain_charge_vectors_are_lookups() {
        let charges = vec![1.0, 0.0, -1.0];
        assert_eq!(charges.charge(1), Some(0.0));
        assert_eq!(charges[..].charge(5), None);
    }
}
