// Dua module
// The two devotional texts rotated on the portal

use serde::Serialize;

/// A devotional text with its Urdu title, Arabic body and Urdu translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dua {
    pub title: &'static str,
    pub arabic: &'static str,
    pub urdu: &'static str,
}

impl Dua {
    /// Select a bundled dua by index; out-of-range falls back to the first.
    pub fn for_index(index: usize) -> &'static Dua {
        DUAS.get(index).unwrap_or(&DUAS[0])
    }
}

/// Index 0 is shown while counting down to sehri, index 1 towards iftar.
pub const DUAS: &[Dua] = &[
    Dua {
        title: "سحری کی دعا",
        arabic: "وَبِصَوْمِ غَدٍ نَّوَيْتُ مِنْ شَهْرِ رَمَضَانَ",
        urdu: "اور میں نے کل کے رمضان کے روزے کی نیت کی",
    },
    Dua {
        title: "افطار کی دعا",
        arabic: "اللَّهُمَّ اِنِّى لَكَ صُمْتُ وَبِكَ امنْتُ وَعَلَيْكَ تَوَكَّلْتُ وَعَلَى رِزْقِكَ اَفْطَرْتُ",
        urdu: "اے اللہ! میں نے تیرے ہی لیے روزہ رکھا اور تجھ پر ہی ایمان لایا اور تجھ پر ہی بھروسہ کیا اور تیرے ہی دیے ہوئے رزق سے افطار کیا",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_bundled_duas() {
        assert_eq!(DUAS.len(), 2);
    }

    #[test]
    fn test_for_index_selects_matching_dua() {
        assert_eq!(Dua::for_index(0).title, "سحری کی دعا");
        assert_eq!(Dua::for_index(1).title, "افطار کی دعا");
    }

    #[test]
    fn test_for_index_clamps_out_of_range() {
        assert_eq!(Dua::for_index(7), &DUAS[0]);
    }
}
