//! MediaPipe hand topology: 21 normalized points per hand.

use crate::Error;

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// A single landmark in image-normalized coordinates (`0.0..=1.0`, `y` grows
/// downward). `z` is relative depth and is zero when the source only
/// provides 2D points.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Planar distance; depth from a monocular detector is too noisy to use.
    pub fn distance_2d(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct HandLandmarks([Landmark; LANDMARK_COUNT]);

impl HandLandmarks {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self(points)
    }

    /// Parse a flat buffer as delivered by detector bindings: either 42 values
    /// (`x, y` pairs) or 63 values (`x, y, z` triples).
    pub fn from_flat(data: &[f32]) -> Result<Self, Error> {
        let stride = match data.len() {
            n if n == LANDMARK_COUNT * 2 => 2,
            n if n == LANDMARK_COUNT * 3 => 3,
            n => return Err(Error::InvalidLength(n)),
        };

        let mut points = [Landmark::default(); LANDMARK_COUNT];
        let chunks = data.chunks_exact(stride);
        for (index, (point, chunk)) in points.iter_mut().zip(chunks).enumerate() {
            if chunk.iter().any(|v| !v.is_finite()) {
                return Err(Error::NonFinite { index });
            }
            *point = Landmark {
                x: chunk[0],
                y: chunk[1],
                z: if stride == 3 { chunk[2] } else { 0.0 },
            };
        }

        Ok(Self(points))
    }

    pub fn points(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.0.get(index)
    }
}

impl std::ops::Index<usize> for HandLandmarks {
    type Output = Landmark;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl TryFrom<Vec<Landmark>> for HandLandmarks {
    type Error = Error;

    fn try_from(points: Vec<Landmark>) -> Result<Self, Self::Error> {
        let len = points.len();
        let points: [Landmark; LANDMARK_COUNT] =
            points.try_into().map_err(|_| Error::InvalidLength(len))?;
        if let Some(index) = points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()))
        {
            return Err(Error::NonFinite { index });
        }
        Ok(Self(points))
    }
}

impl From<HandLandmarks> for Vec<Landmark> {
    fn from(hand: HandLandmarks) -> Self {
        hand.0.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_flat_accepts_pairs() {
        let data: Vec<f32> = (0..42).map(|i| i as f32 / 100.0).collect();
        let hand = HandLandmarks::from_flat(&data).unwrap();
        assert_eq!(hand[WRIST], Landmark::new(0.0, 0.01));
        assert_eq!(hand[PINKY_TIP], Landmark::new(0.40, 0.41));
    }

    #[test]
    fn from_flat_accepts_triples() {
        let data: Vec<f32> = (0..63).map(|i| i as f32).collect();
        let hand = HandLandmarks::from_flat(&data).unwrap();
        assert_eq!(hand[THUMB_CMC].z, 5.0);
        assert_eq!(hand[PINKY_TIP].x, 60.0);
    }

    #[test]
    fn from_flat_rejects_other_lengths() {
        assert!(matches!(
            HandLandmarks::from_flat(&[0.0; 99]),
            Err(Error::InvalidLength(99))
        ));
        assert!(matches!(HandLandmarks::from_flat(&[]), Err(Error::InvalidLength(0))));
    }

    #[test]
    fn from_flat_rejects_nan() {
        let mut data = vec![0.5; 42];
        data[17] = f32::NAN;
        assert!(matches!(
            HandLandmarks::from_flat(&data),
            Err(Error::NonFinite { index: 8 })
        ));
    }

    #[test]
    fn deserializes_from_point_list() {
        let json = serde_json::to_string(&vec![Landmark::new(0.1, 0.2); 21]).unwrap();
        let hand: HandLandmarks = serde_json::from_str(&json).unwrap();
        assert_eq!(hand[INDEX_TIP], Landmark::new(0.1, 0.2));

        let short = serde_json::to_string(&vec![Landmark::new(0.1, 0.2); 20]).unwrap();
        assert!(serde_json::from_str::<HandLandmarks>(&short).is_err());
    }

    #[test]
    fn distance_ignores_depth() {
        let a = Landmark {
            z: 5.0,
            ..Landmark::new(0.0, 0.0)
        };
        let b = Landmark {
            z: -5.0,
            ..Landmark::new(0.3, 0.4)
        };
        approx::assert_relative_eq!(a.distance_2d(&b), 0.5);
    }
}
