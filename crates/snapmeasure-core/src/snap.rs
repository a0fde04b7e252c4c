//! 捕捉设置
//!
//! 交互变换时吸附到的几何元素类型，以及吸附基准点。

use serde::{Deserialize, Serialize};

/// 捕捉元素类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SnapElement {
    Increment,
    Vertex,
    Edge,
    Face,
    Volume,
    EdgeMidpoint,
    EdgePerpendicular,
}

impl SnapElement {
    pub const ALL: [SnapElement; 7] = [
        SnapElement::Increment,
        SnapElement::Vertex,
        SnapElement::Edge,
        SnapElement::Face,
        SnapElement::Volume,
        SnapElement::EdgeMidpoint,
        SnapElement::EdgePerpendicular,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SnapElement::Increment => "Increment",
            SnapElement::Vertex => "Vertex",
            SnapElement::Edge => "Edge",
            SnapElement::Face => "Face",
            SnapElement::Volume => "Volume",
            SnapElement::EdgeMidpoint => "Edge Center",
            SnapElement::EdgePerpendicular => "Edge Perpendicular",
        }
    }

    fn bit(&self) -> u16 {
        match self {
            SnapElement::Increment => SnapElements::INCREMENT,
            SnapElement::Vertex => SnapElements::VERTEX,
            SnapElement::Edge => SnapElements::EDGE,
            SnapElement::Face => SnapElements::FACE,
            SnapElement::Volume => SnapElements::VOLUME,
            SnapElement::EdgeMidpoint => SnapElements::EDGE_MIDPOINT,
            SnapElement::EdgePerpendicular => SnapElements::EDGE_PERPENDICULAR,
        }
    }
}

/// 启用的捕捉元素集合（位域）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapElements {
    bits: u16,
}

impl SnapElements {
    pub const INCREMENT: u16 = 1 << 0;
    pub const VERTEX: u16 = 1 << 1;
    pub const EDGE: u16 = 1 << 2;
    pub const FACE: u16 = 1 << 3;
    pub const VOLUME: u16 = 1 << 4;
    pub const EDGE_MIDPOINT: u16 = 1 << 5;
    pub const EDGE_PERPENDICULAR: u16 = 1 << 6;

    pub const NONE: SnapElements = SnapElements { bits: 0 };

    /// 只包含一个元素的集合
    pub fn only(element: SnapElement) -> Self {
        Self { bits: element.bit() }
    }

    pub fn contains(&self, element: SnapElement) -> bool {
        self.bits & element.bit() != 0
    }

    pub fn set(&mut self, element: SnapElement, enabled: bool) {
        if enabled {
            self.bits |= element.bit();
        } else {
            self.bits &= !element.bit();
        }
    }

    pub fn clear(&mut self) {
        self.bits = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = SnapElement> + '_ {
        SnapElement::ALL.into_iter().filter(|e| self.contains(*e))
    }
}

impl Default for SnapElements {
    fn default() -> Self {
        Self::only(SnapElement::Increment)
    }
}

impl FromIterator<SnapElement> for SnapElements {
    fn from_iter<I: IntoIterator<Item = SnapElement>>(iter: I) -> Self {
        let mut elements = Self::NONE;
        for e in iter {
            elements.set(e, true);
        }
        elements
    }
}

/// 捕捉基准
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SnapTarget {
    #[default]
    Closest,
    Center,
    Median,
    Active,
}

impl SnapTarget {
    pub fn name(&self) -> &'static str {
        match self {
            SnapTarget::Closest => "Closest",
            SnapTarget::Center => "Center",
            SnapTarget::Median => "Median",
            SnapTarget::Active => "Active",
        }
    }
}

/// 工具设置（捕捉部分）
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ToolSettings {
    pub use_snap: bool,
    pub snap_elements: SnapElements,
    pub snap_target: SnapTarget,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_and_contains() {
        let elements = SnapElements::only(SnapElement::Vertex);
        assert!(elements.contains(SnapElement::Vertex));
        assert!(!elements.contains(SnapElement::Edge));
        assert_eq!(elements.iter().collect::<Vec<_>>(), [SnapElement::Vertex]);
    }

    #[test]
    fn test_from_iter_and_clear() {
        let mut elements: SnapElements = [SnapElement::Vertex, SnapElement::Face]
            .into_iter()
            .collect();
        assert_eq!(elements.iter().count(), 2);
        elements.set(SnapElement::Face, false);
        assert_eq!(elements, SnapElements::only(SnapElement::Vertex));
        elements.clear();
        assert!(elements.is_empty());
    }
}
