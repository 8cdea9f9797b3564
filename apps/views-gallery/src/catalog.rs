use indexmap::IndexMap;
use viewkit_core::Scope;
use viewkit_ui::DisplayNode;

use crate::views;

pub type ViewFn = fn(&Scope<'_>) -> DisplayNode;

#[derive(Clone, Copy)]
pub struct ViewEntry {
    pub summary: &'static str,
    pub build: ViewFn,
}

impl std::fmt::Debug for ViewEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewEntry")
            .field("summary", &self.summary)
            .finish_non_exhaustive()
    }
}

/// Named views in display order.
#[derive(Debug, Default)]
pub struct ViewCatalog {
    entries: IndexMap<&'static str, ViewEntry>,
}

impl ViewCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        name: &'static str,
        summary: &'static str,
        build: ViewFn,
    ) -> &mut Self {
        if self.entries.insert(name, ViewEntry { summary, build }).is_some() {
            log::warn!("view {name:?} registered twice; keeping the latest");
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&ViewEntry> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ViewEntry)> {
        self.entries.iter().map(|(name, entry)| (*name, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every view in the gallery.
    pub fn gallery() -> Self {
        let mut catalog = Self::new();
        catalog
            .register(
                "capsule-text",
                "shared capsule modifier with per-use colors",
                views::capsule_text_view,
            )
            .register(
                "duplicate-modifiers",
                "the capsule styling written out twice",
                views::duplicate_modifiers_view,
            )
            .register(
                "spells-builder",
                "two views returned from a builder",
                views::spells_builder_view,
            )
            .register("spells-group", "two views in a group", views::spells_group_view)
            .register("spells-vstack", "two views in a vertical stack", views::spells_vstack_view)
            .register(
                "views-as-properties",
                "stored views styled at use",
                views::views_as_properties_view,
            )
            .register("regular-blur", "blur radii add up", views::regular_blur_view)
            .register(
                "environment-font",
                "inner font overrides outer font",
                views::environment_font_view,
            )
            .register("conditional-if", "one of two buttons per state", views::conditional_if_view)
            .register(
                "conditional-ternary",
                "one button, color chosen by state",
                views::conditional_ternary_view,
            )
            .register("tuple", "four texts at the root", views::tuple_view)
            .register("text", "a single text", views::text_view)
            .register(
                "padding-background",
                "four padding/background layers",
                views::padding_background_view,
            )
            .register(
                "button-frame-background",
                "frame then background",
                views::button_frame_background_view,
            )
            .register(
                "button-background-frame",
                "background then frame",
                views::button_background_frame_view,
            )
            .register("max-frame", "text filling the viewport", views::max_frame_view)
            .register("grid", "4x4 grid of generated cells", views::grid_view);
        catalog
    }
}
