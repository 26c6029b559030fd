//! Static dispatch and the most specific function
//!
//! Which function runs is decided at compile time from the static type of
//! the argument. With a concrete `Label` in hand, code can call the
//! label-specific describer. Once labels and buttons are stored together as
//! `&dyn View`, the only thing known statically is "some view", so only
//! the view-level describer applies, even for the elements that are labels.

use playground_common::Transcript;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

pub trait View {
    fn frame(&self) -> Rect;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub frame: Rect,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub frame: Rect,
}

impl View for Label {
    fn frame(&self) -> Rect {
        self.frame
    }
}

impl View for Button {
    fn frame(&self) -> Rect {
        self.frame
    }
}

/// The general describer: works for any view, knows nothing about it.
pub fn describe_view<V: View + ?Sized>(_view: &V) -> String {
    "It's a view".to_string()
}

/// The specific describer: only callable with a statically known `Label`.
pub fn describe_label(label: &Label) -> String {
    match &label.text {
        Some(text) => format!("It's a label with text {text}"),
        None => "It's a label without text".to_string(),
    }
}

/// Per-type choice made at compile time through a trait impl.
pub trait Describe {
    fn describe(&self) -> String;
}

impl Describe for Label {
    fn describe(&self) -> String {
        describe_label(self)
    }
}

impl Describe for Button {
    fn describe(&self) -> String {
        describe_view(self)
    }
}

/// Describes a mixed list. The static type is `dyn View`, so every element
/// gets the general description.
pub fn describe_all(views: &[&dyn View]) -> Vec<String> {
    playground_common::sequence::map(views, |view| describe_view(*view))
}

pub fn sample_label() -> Label {
    Label {
        frame: Rect::new(0.0, 0.0, 10.0, 10.0),
        text: Some("I'm a label".to_string()),
    }
}

pub fn sample_button() -> Button {
    Button {
        frame: Rect::new(0.0, 0.0, 20.0, 20.0),
    }
}

pub fn tour() -> Transcript {
    let mut t = Transcript::new("Static Dispatch");
    let label = sample_label();
    let button = sample_button();
    t.record("label, statically a Label", &label.describe());
    t.record("button, statically a Button", &button.describe());
    t.note("Stored together, both are only known as views:");
    let views: Vec<&dyn View> = vec![&label, &button];
    t.record("as &dyn View", &describe_all(&views));
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_types_get_specific_description() {
        let label = sample_label();
        let button = sample_button();
        assert_eq!(label.describe(), "It's a label with text I'm a label");
        assert_eq!(button.describe(), "It's a view");
    }

    #[test]
    fn test_trait_objects_get_general_description() {
        let label = sample_label();
        let button = sample_button();
        let views: Vec<&dyn View> = vec![&label, &button];

        assert_eq!(describe_all(&views), vec!["It's a view", "It's a view"]);
        assert_eq!(views[1].frame().width, 20.0);
    }

    #[test]
    fn test_tour_records_both_views() {
        let t = tour();
        assert_eq!(
            t.value_of("as &dyn View"),
            Some(r#"["It's a view", "It's a view"]"#)
        );
    }

    #[test]
    fn test_label_without_text() {
        let label = Label {
            frame: Rect::new(1.0, 1.0, 1.0, 1.0),
            text: None,
        };
        assert_eq!(describe_label(&label), "It's a label without text");
    }
}
