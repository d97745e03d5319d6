/// A raw sample from a Monte-Carlo protonation run: one conformer choice per
/// titratable site, the sample energy, and how many times it was visited.
pub trait Sample {
    /// Conformer index chosen at each site, in site order.
    fn state(&self) -> &[usize];

    fn energy(&self) -> f64;

    fn count(&self) -> u64;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Microstate {
    pub state: Vec<usize>,
    pub energy: f64,
    pub count: u64,
}

impl Microstate {
    pub fn new(state: Vec<usize>, energy: f64, count: u64) -> Self {
        Self {
            state,
            energy,
            count,
        }
    }

    #[inline]
    pub fn site_count(&self) -> usize {
        self.state.len()
    }
}

impl Sample for Microstate {
    fn state(&self) -> &[usize] {
        &self.state
    }

    fn energy(&self) -> f64 {
        self.energy
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl<T: Sample + ?Sized> Sample for &T {
    fn state(&self) -> &[usize] {
        (**self).state()
    }

    fn energy(&self) -> f64 {
        (**self).energy()
    }

    fn count(&self) -> u64 {
        (**self).count()
    }
}
