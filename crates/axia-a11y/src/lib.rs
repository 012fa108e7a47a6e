//! Axia Accessibility
//!
//! Semantic state layer over the Axia document tree. Callers ask about or
//! change a node's accessibility state (disabled/selected/checked/expanded,
//! focusability, labelling) without knowing whether the node expresses that
//! state through a native widget flag or through an ARIA role/attribute pair.
//!
//! Features:
//! - Capability classification per state axis (native tag or ARIA role)
//! - State readers with ARIA-over-native precedence
//! - State writers that keep both mechanisms consistent
//! - Focus-set resolution for sequential keyboard navigation
//! - Labelling/controlling relationship resolution

pub mod axis;
pub mod focus;
pub mod relations;
pub mod state;

pub use axis::{supports, StateAxis};
pub use focus::{
    can_be_focused, first_focusable, focusable_descendants, last_focusable, set_untabbable,
};
pub use relations::{
    active_descendant, active_descendant_element, controlling_elements, controls_elements,
    controls_ids, label_text, labelled_by_elements, labelled_by_ids,
};
pub use state::{
    is_checked, is_checked_or_selected, is_disabled, is_expanded, is_mixed, is_multiselectable,
    is_selected, set_checked, set_disabled, set_expanded, set_selected,
};

/// Accessibility error
#[derive(Debug, thiserror::Error)]
pub enum A11yError {
    /// A reference attribute required by the operation is absent. Callers
    /// of the `*_elements` resolvers must check the `*_ids` accessor first.
    #[error("node has no {0} attribute to resolve")]
    MissingReference(&'static str),
}
