use crate::landmarks::*;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// `(pip, tip)` landmark indices. For the thumb the IP joint plays the
    /// role of the PIP.
    fn joints(self) -> (usize, usize) {
        match self {
            Finger::Thumb => (THUMB_IP, THUMB_TIP),
            Finger::Index => (INDEX_PIP, INDEX_TIP),
            Finger::Middle => (MIDDLE_PIP, MIDDLE_TIP),
            Finger::Ring => (RING_PIP, RING_TIP),
            Finger::Pinky => (PINKY_PIP, PINKY_TIP),
        }
    }

    /// Whether this finger is extended in `hand`.
    ///
    /// Long fingers are "up" when the tip sits above the PIP joint in image
    /// space. The thumb folds sideways, so it is extended when its tip is
    /// farther from the index knuckle than its IP joint is.
    pub fn is_extended(self, hand: &HandLandmarks) -> bool {
        let (pip, tip) = self.joints();
        match self {
            Finger::Thumb => {
                let anchor = &hand[INDEX_MCP];
                hand[tip].distance_2d(anchor) > hand[pip].distance_2d(anchor)
            }
            _ => hand[tip].y < hand[pip].y,
        }
    }
}

/// Extended/curled state of all five fingers for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
pub struct FingerState {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerState {
    pub fn from_hand(hand: &HandLandmarks) -> Self {
        Self {
            thumb: Finger::Thumb.is_extended(hand),
            index: Finger::Index.is_extended(hand),
            middle: Finger::Middle.is_extended(hand),
            ring: Finger::Ring.is_extended(hand),
            pinky: Finger::Pinky.is_extended(hand),
        }
    }

    pub fn get(&self, finger: Finger) -> bool {
        match finger {
            Finger::Thumb => self.thumb,
            Finger::Index => self.index,
            Finger::Middle => self.middle,
            Finger::Ring => self.ring,
            Finger::Pinky => self.pinky,
        }
    }

    pub fn extended_count(&self) -> usize {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
            .into_iter()
            .filter(|up| *up)
            .count()
    }
}
