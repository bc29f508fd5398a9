// crates/trellis-core/src/widget.rs
use std::collections::HashMap;

use glam::{Vec2, Vec4};

/// Opaque per-widget attribute value, passed through to the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    String(String),
    Int(i32),
    Float(f32),
    Bool(bool),
    Color(Vec4),
}

impl AttrValue {
    pub fn as_string(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            AttrValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            AttrValue::Float(f) => Some(*f),
            AttrValue::Int(i) => Some(*i as f32),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Vec4> {
        match self {
            AttrValue::Color(c) => Some(*c),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlignment {
    Start,
    Center,
    End,
}

/// Placement of a text-bearing widget's text relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextAnchor {
    pub offset: Vec2,
    pub alignment: TextAlignment,
}

/// Configuration record the backend's widget factory consumes.
///
/// `kind` names the backend widget class to instantiate; the attribute bag
/// carries everything else (colors, text, scales) unexamined by the layout
/// core. The core only ever writes the created widget's geometry rectangle
/// and, when `text_anchor` is set, its text placement.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub kind: String,
    pub attributes: HashMap<String, AttrValue>,
    pub text_anchor: Option<TextAnchor>,
}

impl WidgetConfig {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attributes: HashMap::new(),
            text_anchor: None,
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: AttrValue) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    pub fn with_text_anchor(mut self, offset: Vec2, alignment: TextAlignment) -> Self {
        self.text_anchor = Some(TextAnchor { offset, alignment });
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }
}
