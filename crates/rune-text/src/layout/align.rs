use serde::{Deserialize, Serialize};

/// Horizontal placement of a line or block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

impl HorizontalAlign {
    /// Fraction of the free space placed before the aligned item.
    pub fn factor(self) -> f32 {
        match self {
            HorizontalAlign::Left => 0.0,
            HorizontalAlign::Center => 0.5,
            HorizontalAlign::Right => 1.0,
        }
    }
}

/// Vertical placement of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

impl VerticalAlign {
    /// Fraction of the free space placed above the aligned item.
    pub fn factor(self) -> f32 {
        match self {
            VerticalAlign::Top => 0.0,
            VerticalAlign::Center => 0.5,
            VerticalAlign::Bottom => 1.0,
        }
    }
}

/// Nine-way alignment used both for glyph alignment inside the text block and
/// for positioning the block inside the widget bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    LeftTop,
    LeftCenter,
    LeftBottom,
    CenterTop,
    CenterCenter,
    CenterBottom,
    RightTop,
    RightCenter,
    RightBottom,
}

impl Alignment {
    pub fn new(horizontal: HorizontalAlign, vertical: VerticalAlign) -> Self {
        use HorizontalAlign as H;
        use VerticalAlign as V;
        match (horizontal, vertical) {
            (H::Left, V::Top) => Alignment::LeftTop,
            (H::Left, V::Center) => Alignment::LeftCenter,
            (H::Left, V::Bottom) => Alignment::LeftBottom,
            (H::Center, V::Top) => Alignment::CenterTop,
            (H::Center, V::Center) => Alignment::CenterCenter,
            (H::Center, V::Bottom) => Alignment::CenterBottom,
            (H::Right, V::Top) => Alignment::RightTop,
            (H::Right, V::Center) => Alignment::RightCenter,
            (H::Right, V::Bottom) => Alignment::RightBottom,
        }
    }

    pub fn horizontal(self) -> HorizontalAlign {
        match self {
            Alignment::LeftTop | Alignment::LeftCenter | Alignment::LeftBottom => {
                HorizontalAlign::Left
            }
            Alignment::CenterTop | Alignment::CenterCenter | Alignment::CenterBottom => {
                HorizontalAlign::Center
            }
            Alignment::RightTop | Alignment::RightCenter | Alignment::RightBottom => {
                HorizontalAlign::Right
            }
        }
    }

    pub fn vertical(self) -> VerticalAlign {
        match self {
            Alignment::LeftTop | Alignment::CenterTop | Alignment::RightTop => VerticalAlign::Top,
            Alignment::LeftCenter | Alignment::CenterCenter | Alignment::RightCenter => {
                VerticalAlign::Center
            }
            Alignment::LeftBottom | Alignment::CenterBottom | Alignment::RightBottom => {
                VerticalAlign::Bottom
            }
        }
    }

    /// Parse the kebab-case name used in configuration files.
    pub fn from_name(name: &str) -> Option<Self> {
        let (h, v) = name.trim().split_once('-')?;
        let horizontal = match h {
            "left" => HorizontalAlign::Left,
            "center" => HorizontalAlign::Center,
            "right" => HorizontalAlign::Right,
            _ => return None,
        };
        let vertical = match v {
            "top" => VerticalAlign::Top,
            "center" => VerticalAlign::Center,
            "bottom" => VerticalAlign::Bottom,
            _ => return None,
        };
        Some(Self::new(horizontal, vertical))
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::LeftTop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_components() {
        for h in [HorizontalAlign::Left, HorizontalAlign::Center, HorizontalAlign::Right] {
            for v in [VerticalAlign::Top, VerticalAlign::Center, VerticalAlign::Bottom] {
                let a = Alignment::new(h, v);
                assert_eq!(a.horizontal(), h);
                assert_eq!(a.vertical(), v);
            }
        }
    }

    #[test]
    fn test_alignment_from_name() {
        assert_eq!(Alignment::from_name("right-bottom"), Some(Alignment::RightBottom));
        assert_eq!(Alignment::from_name(" center-top "), Some(Alignment::CenterTop));
        assert_eq!(Alignment::from_name("middle"), None);
        assert_eq!(Alignment::from_name("left-middle"), None);
    }
}
