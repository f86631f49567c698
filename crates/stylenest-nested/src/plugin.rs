//! The nesting plugin.
//!
//! For every processed style rule, each nested selector key is removed from
//! the rule's declarations and either turned into a new rule in the same
//! container or reported through the warning sink.

use std::fmt;
use std::rc::Rc;

use stylenest_core::logging::targets;
use stylenest_core::plugin::{Plugin, RuleContext};
use stylenest_core::rules::RuleOptions;
use stylenest_core::types::StyleValue;

use crate::selector::{is_nested_key, resolve};
use crate::NestingError;

/// Default number of nesting levels allowed below a top-level rule.
pub const DEFAULT_MAX_DEPTH: usize = 1;

/// Receives warning messages.
pub type WarnSink = Rc<dyn Fn(&str)>;

/// Options for [`NestedPlugin`].
#[derive(Clone)]
pub struct NestedOptions {
    /// Where warnings go. Defaults to `tracing::warn!`.
    pub warn: WarnSink,
    /// Maximum depth of a created rule. Top-level rules have depth 0.
    pub max_depth: usize,
}

impl NestedOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the warning sink.
    pub fn warn(mut self, sink: impl Fn(&str) + 'static) -> Self {
        self.warn = Rc::new(sink);
        self
    }

    /// Set the maximum nesting depth.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for NestedOptions {
    fn default() -> Self {
        Self {
            warn: Rc::new(log_warning),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl fmt::Debug for NestedOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NestedOptions")
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}

fn log_warning(message: &str) {
    tracing::warn!(target: targets::NESTED, "[stylenest] {message}");
}

/// Flattens `&` and `$name` selector keys into rules of their own.
///
/// # Example
///
/// ```
/// use stylenest_core::prelude::*;
/// use stylenest_nested::NestedPlugin;
///
/// let mut system = StyleSystem::new();
/// system.use_plugin(NestedPlugin::default());
///
/// let sheet = system.create_style_sheet(
///     StyleDefinition::new().rule(
///         "a",
///         Declarations::new()
///             .with("float", "left")
///             .with("&b, &c", Declarations::new().with("float", "left")),
///     ),
///     SheetOptions::unnamed(),
/// );
///
/// assert_eq!(
///     sheet.to_css(),
///     "a {\n  float: left;\n}\nab, ac {\n  float: left;\n}"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct NestedPlugin {
    options: NestedOptions,
}

impl NestedPlugin {
    /// Create the plugin.
    pub fn new(options: NestedOptions) -> Self {
        Self { options }
    }

    /// The plugin options.
    pub fn options(&self) -> &NestedOptions {
        &self.options
    }

    fn report(&self, error: &NestingError) {
        (self.options.warn)(&error.to_string());
    }
}

impl Plugin for NestedPlugin {
    fn on_process_rule(&self, ctx: &mut RuleContext<'_, '_>) {
        let Some(rule) = ctx.rule_mut().as_style_mut() else {
            return;
        };

        let keys: Vec<String> = rule
            .style
            .keys()
            .filter(|key| is_nested_key(key))
            .map(str::to_string)
            .collect();
        if keys.is_empty() {
            return;
        }

        let parent = rule.selector.clone();
        let depth = rule.depth + 1;
        let nested: Vec<_> = keys
            .into_iter()
            .filter_map(|key| rule.style.remove(&key).map(|value| (key, value)))
            .collect();

        for (key, value) in nested {
            if depth > self.options.max_depth {
                self.report(&NestingError::too_deep(key));
                continue;
            }

            let StyleValue::Block(style) = value else {
                tracing::warn!(
                    target: targets::NESTED,
                    "Ignoring nested selector \"{key}\" in \"{parent}\", expected a declaration block"
                );
                continue;
            };

            let container = ctx.container();
            let resolution = resolve(&key, &parent, |name| container.selector_of(name));
            match resolution.into_result() {
                Ok(selector) => {
                    tracing::debug!(
                        target: targets::NESTED,
                        parent = %parent,
                        key = %key,
                        selector = %selector,
                        depth,
                        "flattened nested rule"
                    );
                    ctx.add_rule(
                        selector.clone(),
                        style,
                        RuleOptions::with_selector(selector).depth(depth),
                    );
                }
                Err(errors) => {
                    for error in &errors {
                        self.report(error);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;
    use std::sync::{Arc, Mutex};
    use stylenest_core::prelude::*;

    fn capture() -> (Rc<RefCell<Vec<String>>>, NestedOptions) {
        let warnings = Rc::new(RefCell::new(Vec::new()));
        let sink = warnings.clone();
        let options = NestedOptions::new().warn(move |message| {
            sink.borrow_mut().push(message.to_string());
        });
        (warnings, options)
    }

    fn system(options: NestedOptions) -> StyleSystem {
        let mut system = StyleSystem::new();
        system.use_plugin(NestedPlugin::new(options));
        system
    }

    #[test]
    fn nested_keys_are_removed() {
        let (warnings, options) = capture();
        let sheet = system(options).create_style_sheet(
            StyleDefinition::new().rule(
                "a",
                Declarations::new()
                    .with("float", "left")
                    .with("& b", Declarations::new().with("float", "left"))
                    .with("&c", Declarations::new().with("float", "left")),
            ),
            SheetOptions::unnamed(),
        );

        let a = sheet.get_rule("a").and_then(Rule::as_style).unwrap();
        assert_eq!(a.style.keys().collect::<Vec<_>>(), vec!["float"]);
        assert!(sheet.get_rule("a b").is_some());
        assert!(sheet.get_rule("ac").is_some());
        assert!(warnings.borrow().is_empty());
    }

    #[test]
    fn children_keep_key_order() {
        let (_, options) = capture();
        let sheet = system(options).create_style_sheet(
            StyleDefinition::new()
                .rule(
                    "a",
                    Declarations::new()
                        .with("&b", Declarations::new().with("x", "1"))
                        .with("& c", Declarations::new().with("x", "2")),
                )
                .rule("d", Declarations::new().with("x", "3")),
            SheetOptions::unnamed(),
        );

        let keys: Vec<_> = sheet.rules().iter().map(Rule::key).collect();
        assert_eq!(keys, vec!["a", "ab", "a c", "d"]);
    }

    #[test]
    fn depth_is_recorded_on_children() {
        let (_, options) = capture();
        let sheet = system(options).create_style_sheet(
            StyleDefinition::new().rule(
                "a",
                Declarations::new().with("&:hover", Declarations::new().with("x", "1")),
            ),
            SheetOptions::unnamed(),
        );

        let child = sheet.get_rule("a:hover").and_then(Rule::as_style).unwrap();
        assert_eq!(child.depth, 1);
    }

    #[test]
    fn too_deep_drops_only_the_inner_key() {
        let (warnings, options) = capture();
        let sheet = system(options).create_style_sheet(
            StyleDefinition::new().rule(
                "a",
                Declarations::new().with(
                    "& .a",
                    Declarations::new()
                        .with("float", "left")
                        .with("& .b", Declarations::new().with("float", "left")),
                ),
            ),
            SheetOptions::unnamed(),
        );

        assert_eq!(*warnings.borrow(), vec!["Nesting is too deep \"& .b\"."]);
        let child = sheet.get_rule("a .a").and_then(Rule::as_style).unwrap();
        assert!(!child.style.contains_key("& .b"));
        assert!(sheet.get_rule("a .a .b").is_none());
    }

    #[test]
    fn max_depth_is_configurable() {
        let (warnings, options) = capture();
        let sheet = system(options.max_depth(2)).create_style_sheet(
            StyleDefinition::new().rule(
                "a",
                Declarations::new().with(
                    "& b",
                    Declarations::new().with(
                        "& c",
                        Declarations::new()
                            .with("x", "1")
                            .with("& d", Declarations::new().with("x", "2")),
                    ),
                ),
            ),
            SheetOptions::unnamed(),
        );

        assert!(sheet.get_rule("a b c").is_some());
        assert!(sheet.get_rule("a b c d").is_none());
        assert_eq!(*warnings.borrow(), vec!["Nesting is too deep \"& d\"."]);
    }

    #[test]
    fn unresolved_reference_warns_and_skips() {
        let (warnings, options) = capture();
        let sheet = system(options).create_style_sheet(
            StyleDefinition::new().rule(
                "a",
                Declarations::new()
                    .with("color", "red")
                    .with("& $missing", Declarations::new().with("float", "left")),
            ),
            SheetOptions::default(),
        );

        assert_eq!(
            *warnings.borrow(),
            vec!["Could not find the referenced rule \"missing\"."]
        );
        assert_eq!(sheet.rules().len(), 1);
        let a = sheet.get_rule("a").and_then(Rule::as_style).unwrap();
        assert!(!a.style.contains_key("& $missing"));
    }

    #[test]
    fn plain_value_under_nested_key_is_dropped() {
        let (warnings, options) = capture();
        let sheet = system(options).create_style_sheet(
            StyleDefinition::new().rule("a", Declarations::new().with("&b", "red")),
            SheetOptions::unnamed(),
        );

        assert_eq!(sheet.rules().len(), 1);
        assert!(warnings.borrow().is_empty());
        let a = sheet.get_rule("a").and_then(Rule::as_style).unwrap();
        assert!(a.style.is_empty());
    }

    #[test]
    fn too_deep_plain_value_is_reported() {
        let (warnings, options) = capture();
        let sheet = system(options).create_style_sheet(
            StyleDefinition::new().rule(
                "a",
                Declarations::new().with(
                    "& b",
                    Declarations::new().with("x", "1").with("& c", "red"),
                ),
            ),
            SheetOptions::unnamed(),
        );

        assert_eq!(*warnings.borrow(), vec!["Nesting is too deep \"& c\"."]);
        let child = sheet.get_rule("a b").and_then(Rule::as_style).unwrap();
        assert!(!child.style.contains_key("& c"));
    }

    /// Collects everything a `fmt` subscriber writes.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn default_sink_logs_a_warning() {
        let options = NestedOptions::default();
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            (options.warn)("Nesting is too deep \"x\".");
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains(targets::NESTED), "{output}");
        assert!(
            output.contains("[stylenest] Nesting is too deep \"x\"."),
            "{output}"
        );
    }
}
