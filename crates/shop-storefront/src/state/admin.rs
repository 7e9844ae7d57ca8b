//! Admin product form section switcher.

/// Section shown when the product form opens.
pub const GENERAL_SECTION: &str = "general";

/// Section listing the product's variants.
pub const VARIANTS_SECTION: &str = "product-variants";

/// Mutually exclusive sections of the admin product form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSections {
    sections: Vec<String>,
    visible: usize,
}

impl Default for AdminSections {
    fn default() -> Self {
        Self {
            sections: vec![GENERAL_SECTION.to_string(), VARIANTS_SECTION.to_string()],
            visible: 0,
        }
    }
}

impl AdminSections {
    /// Id of the visible section.
    #[must_use]
    pub fn visible(&self) -> &str {
        &self.sections[self.visible]
    }

    /// Hide the visible section and show `id`.
    ///
    /// Unknown ids leave the switcher unchanged and return `false`.
    pub fn display(&mut self, id: &str) -> bool {
        match self.sections.iter().position(|s| s == id) {
            Some(index) => {
                self.visible = index;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switches_between_sections() {
        let mut admin = AdminSections::default();
        assert_eq!(admin.visible(), GENERAL_SECTION);

        assert!(admin.display(VARIANTS_SECTION));
        assert_eq!(admin.visible(), VARIANTS_SECTION);

        assert!(admin.display(GENERAL_SECTION));
        assert_eq!(admin.visible(), GENERAL_SECTION);
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let mut admin = AdminSections::default();
        admin.display(VARIANTS_SECTION);
        assert!(!admin.display("seo"));
        assert_eq!(admin.visible(), VARIANTS_SECTION);
    }
}
