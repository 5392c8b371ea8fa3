//! Macros for ergonomic context declaration.

/// Declare a context struct together with its patch type.
///
/// The patch struct has one `Option` field per context field and derives
/// `Default`, so an action only names the fields it changes. The
/// generated `Context` impl overwrites exactly the `Some` fields.
///
/// # Example
///
/// ```
/// use tinychart::context_struct;
/// use tinychart::core::Context;
///
/// context_struct! {
///     #[derive(PartialEq)]
///     pub struct OverlayContext {
///         pub level: String,
///         pub messages: Vec<String>,
///     }
///     patch: OverlayPatch
/// }
///
/// let mut ctx = OverlayContext {
///     level: "error".into(),
///     messages: vec![],
/// };
/// ctx.apply(OverlayPatch {
///     level: Some("warning".into()),
///     ..Default::default()
/// });
/// assert_eq!(ctx.level, "warning");
/// assert!(ctx.messages.is_empty());
/// ```
#[macro_export]
macro_rules! context_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }

        patch: $patch:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty
            ),*
        }

        #[derive(Clone, Debug, Default)]
        $vis struct $patch {
            $(
                $field_vis $field: ::core::option::Option<$ty>
            ),*
        }

        impl $crate::core::Context for $name {
            type Patch = $patch;

            fn apply(&mut self, patch: $patch) {
                $(
                    if let ::core::option::Option::Some(value) = patch.$field {
                        self.$field = value;
                    }
                )*
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Context;

    context_struct! {
        #[derive(PartialEq)]
        struct TestContext {
            count: u32,
            name: String,
            tags: Vec<String>,
        }
        patch: TestPatch
    }

    fn sample() -> TestContext {
        TestContext {
            count: 1,
            name: "one".to_string(),
            tags: vec!["a".to_string()],
        }
    }

    #[test]
    fn patch_sets_only_some_fields() {
        let mut ctx = sample();

        ctx.apply(TestPatch {
            count: Some(2),
            ..Default::default()
        });

        assert_eq!(ctx.count, 2);
        assert_eq!(ctx.name, "one");
        assert_eq!(ctx.tags, vec!["a".to_string()]);
    }

    #[test]
    fn default_patch_is_a_noop() {
        let mut ctx = sample();

        ctx.apply(TestPatch::default());

        assert_eq!(ctx, sample());
    }

    #[test]
    fn context_struct_supports_serde_attributes() {
        context_struct! {
            #[derive(serde::Serialize, serde::Deserialize, PartialEq)]
            pub struct Settings {
                #[serde(default)]
                pub verbose: bool,
                pub name: String,
            }
            patch: SettingsPatch
        }

        let settings: Settings = serde_json::from_str(r#"{ "name": "x" }"#).unwrap();
        assert!(!settings.verbose);

        let patch = SettingsPatch {
            verbose: Some(true),
            name: None,
        };
        let mut updated = settings.clone();
        updated.apply(patch);
        assert!(updated.verbose);
        assert_eq!(updated.name, "x");
    }
}
