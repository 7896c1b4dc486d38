/// A compressed packet handed to a decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Packet {
    data: Vec<u8>,
    pts: Option<i64>,
}

impl Packet {
    /// Creates a packet from compressed bytes.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data, pts: None }
    }

    /// Sets the presentation timestamp.
    pub fn with_pts(mut self, pts: i64) -> Self {
        self.pts = Some(pts);
        self
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pts(&self) -> Option<i64> {
        self.pts
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<&[u8]> for Packet {
    fn from(data: &[u8]) -> Self {
        Self::new(data.to_vec())
    }
}

impl From<Vec<u8>> for Packet {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}
