//! The five elements (wuxing).

use serde::Serialize;

/// Five-element category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    Metal,
    Wood,
    Water,
    Fire,
    Earth,
}

/// All elements in glyph-matching order (金 木 水 火 土).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Metal,
    Element::Wood,
    Element::Water,
    Element::Fire,
    Element::Earth,
];

impl Element {
    /// Chinese glyph.
    pub const fn glyph(self) -> char {
        match self {
            Self::Metal => '金',
            Self::Wood => '木',
            Self::Water => '水',
            Self::Fire => '火',
            Self::Earth => '土',
        }
    }

    /// Chinese glyph as a string slice.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Metal => "金",
            Self::Wood => "木",
            Self::Water => "水",
            Self::Fire => "火",
            Self::Earth => "土",
        }
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Metal => "Metal",
            Self::Wood => "Wood",
            Self::Water => "Water",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
        }
    }
}

/// First element whose glyph occurs in `name`, checked in 金 木 水 火 土 order.
pub fn element_in_name(name: &str) -> Option<Element> {
    ALL_ELEMENTS.into_iter().find(|e| name.contains(e.glyph()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_element_glyph() {
        assert_eq!(element_in_name("海中金"), Some(Element::Metal));
        assert_eq!(element_in_name("大林木"), Some(Element::Wood));
        assert_eq!(element_in_name("涧下水"), Some(Element::Water));
        assert_eq!(element_in_name("炉中火"), Some(Element::Fire));
        assert_eq!(element_in_name("路旁土"), Some(Element::Earth));
    }

    #[test]
    fn unknown_name() {
        assert_eq!(element_in_name("unknown"), None);
        assert_eq!(element_in_name(""), None);
    }
}
