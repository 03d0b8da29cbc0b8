//! Single-channel coverage masks

/// 8-bit coverage bitmap (0 = transparent, 255 = fully covered)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl AlphaMask {
    /// Create a fully transparent mask
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize)],
        }
    }

    /// Wrap existing coverage data. Returns `None` when the length does not match.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data[(y * self.width + x) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, coverage: u8) {
        if x < self.width && y < self.height {
            self.data[(y * self.width + x) as usize] = coverage;
        }
    }

    /// Tight bounds of non-zero coverage as `(left, top, right, bottom)`, right/bottom exclusive
    pub fn ink_bounds(&self) -> Option<(u32, u32, u32, u32)> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.get(x, y) == 0 {
                    continue;
                }
                bounds = Some(match bounds {
                    None => (x, y, x + 1, y + 1),
                    Some((l, t, r, b)) => (l.min(x), t.min(y), r.max(x + 1), b.max(y + 1)),
                });
            }
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_checks_length() {
        assert!(AlphaMask::from_vec(2, 2, vec![0; 4]).is_some());
        assert!(AlphaMask::from_vec(2, 2, vec![0; 3]).is_none());
    }

    #[test]
    fn test_set_and_get_ignore_out_of_range() {
        let mut mask = AlphaMask::new(3, 3);
        mask.set(1, 2, 200);
        mask.set(5, 5, 255);
        assert_eq!(mask.get(1, 2), 200);
        assert_eq!(mask.get(5, 5), 0);
    }

    #[test]
    fn test_ink_bounds() {
        let mut mask = AlphaMask::new(8, 8);
        assert_eq!(mask.ink_bounds(), None);
        mask.set(2, 3, 255);
        mask.set(5, 6, 10);
        assert_eq!(mask.ink_bounds(), Some((2, 3, 6, 7)));
    }
}
