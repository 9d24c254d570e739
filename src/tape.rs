use crate::config::Config;

/// The interpreter's linear memory: a row of integer cells addressed by the
/// data pointer.
///
/// Cells start at zero. With a configured cell width `w`, every store is
/// reduced modulo `2^w`, so values stay in `0..2^w` and arithmetic wraps
/// (width 8: 255 + 1 becomes 0, 0 - 1 becomes 255). Without a width, cells
/// are plain `i64`s and may go negative.
///
/// With a configured tape size the whole buffer is allocated up front. An
/// unbounded tape starts empty and zero-fills cells the first time they are
/// written.
pub struct Tape {
    cells: Vec<i64>,
    width: Option<u32>,
}

impl Tape {
    pub fn new(config: &Config) -> Self {
        let cells = match config.tape_size {
            Some(size) => vec![0; size],
            None => Vec::new(),
        };
        Self {
            cells,
            width: config.cell_width,
        }
    }

    /// Value at `index`. Cells that have never been written read as zero.
    pub fn get(&self, index: usize) -> i64 {
        self.cells.get(index).copied().unwrap_or(0)
    }

    /// Store `value` at `index`, reduced to the configured width, growing
    /// the buffer if the cell does not exist yet.
    pub fn set(&mut self, index: usize, value: i64) {
        if index >= self.cells.len() {
            self.cells.resize(index + 1, 0);
        }
        self.cells[index] = self.wrap(value);
    }

    /// Add `delta` to the cell at `index`, wrapping at the configured
    /// width.
    pub fn add(&mut self, index: usize, delta: i64) {
        let value = self.get(index).wrapping_add(delta);
        self.set(index, value);
    }

    /// Low byte of the cell at `index`, as consumed by the write
    /// instruction and the tape dump.
    pub fn byte(&self, index: usize) -> u8 {
        (self.get(index) & 0xFF) as u8
    }

    /// Highest index holding a nonzero value, if any.
    pub fn last_nonzero(&self) -> Option<usize> {
        self.cells.iter().rposition(|&cell| cell != 0)
    }

    fn wrap(&self, value: i64) -> i64 {
        match self.width {
            // The modulus fits in i128 for every width up to 63 bits, so
            // the reduction cannot overflow.
            Some(width) => {
                let modulus = 1_i128 << width;
                ((i128::from(value) % modulus + modulus) % modulus) as i64
            }
            None => value,
        }
    }
}
