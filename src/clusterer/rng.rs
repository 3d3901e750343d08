const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a hash
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |h, &b| {
        (h ^ u32::from(b)).wrapping_mul(FNV_PRIME)
    })
}

/// Small counter-based generator with 32 bits of state (mulberry32).
///
/// Used only to seed centroids, so reproducibility matters more than quality.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seed from corpus shape only: document count and vector dimensionality.
    ///
    /// Two corpora with the same shape draw the same sequence.
    pub fn from_corpus_shape(doc_count: usize, dim: usize) -> Self {
        let key = format!("{}:{}", doc_count, dim);
        Self::new(fnv1a_32(key.as_bytes()))
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6d2b_79f5);
        let a = self.state;

        let mut t = (a ^ (a >> 15)).wrapping_mul(1 | a);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t)) ^ t;
        t ^ (t >> 14)
    }

    /// Uniform draw in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a_known_values() {
        assert_eq!(fnv1a_32(b""), 0x811c_9dc5);
        assert_eq!(fnv1a_32(b"a"), 0xe40c_292c);
        assert_eq!(fnv1a_32(b"foobar"), 0xbf9c_f968);
    }

    #[test]
    fn test_known_stream() {
        let mut rng = Mulberry32::new(fnv1a_32(b"9:12"));
        assert_eq!(fnv1a_32(b"9:12"), 0x6752_3ca9);
        assert_eq!(rng.next_u32(), 0x5985_0dff);
        assert_eq!(rng.next_u32(), 0x22f5_a2b0);
        assert_eq!(rng.next_u32(), 0x6c58_7f7b);
        assert_eq!(rng.next_u32(), 0x72c2_42f7);

        let mut rng = Mulberry32::from_corpus_shape(9, 12);
        let first = rng.next_f64();
        assert_eq!(first, f64::from(0x5985_0dff_u32) / 4_294_967_296.0);
        assert!((first - 0.349_686_503_177_508_7).abs() < 1e-15);
        assert!((rng.next_f64() - 0.136_560_600_250_959_4).abs() < 1e-15);
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = Mulberry32::new(42);
        let mut b = Mulberry32::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_different_seed_different_stream() {
        let mut a = Mulberry32::new(1);
        let mut b = Mulberry32::new(2);
        let xs: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_unit_interval() {
        let mut rng = Mulberry32::new(0);
        for _ in 0..10_000 {
            let x = rng.next_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_corpus_shape_seed() {
        let mut a = Mulberry32::from_corpus_shape(12, 40);
        let mut b = Mulberry32::new(fnv1a_32(b"12:40"));
        assert_eq!(a.next_u32(), b.next_u32());

        let mut c = Mulberry32::from_corpus_shape(12, 41);
        let mut d = Mulberry32::from_corpus_shape(12, 40);
        assert_ne!(c.next_u32(), d.next_u32());
    }
}
