/// A yes/no answer standing in for a verification service that does not
/// exist yet (2FA requirement, session expiry).
pub trait Decision {
    fn decide(&self) -> bool;
}

/// Answers `true` with the given probability.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoinFlip {
    probability: f64,
}

impl CoinFlip {
    pub fn new(probability: f64) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
        }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl Decision for CoinFlip {
    fn decide(&self) -> bool {
        random_unit() < self.probability
    }
}

/// Always gives the same answer.
#[cfg(test)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fixed(pub bool);

#[cfg(test)]
impl Decision for Fixed {
    fn decide(&self) -> bool {
        self.0
    }
}

/// Uniform draw in `[0, 1)`.
#[cfg(target_arch = "wasm32")]
pub fn random_unit() -> f64 {
    js_sys::Math::random()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn random_unit() -> f64 {
    rand::random::<f64>()
}

/// Picks an index into a collection of `len` items.
pub fn random_index(len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let idx = (random_unit() * len as f64).floor() as usize;
    idx.min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coin_flip_extremes_are_deterministic() {
        let never = CoinFlip::new(0.0);
        let always = CoinFlip::new(1.0);
        for _ in 0..64 {
            assert!(!never.decide());
            assert!(always.decide());
        }
    }

    #[test]
    fn coin_flip_clamps_probability() {
        assert_eq!(CoinFlip::new(7.0).probability(), 1.0);
        assert_eq!(CoinFlip::new(-1.0).probability(), 0.0);
    }

    #[test]
    fn fixed_answers_do_not_vary() {
        assert!(Fixed(true).decide());
        assert!(!Fixed(false).decide());
    }

    #[test]
    fn random_index_stays_in_bounds() {
        for _ in 0..256 {
            assert!(random_index(5) < 5);
        }
        assert_eq!(random_index(0), 0);
    }
}
