use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static REF_TYPE: OnceLock<Regex> = OnceLock::new();

fn ref_type_pattern() -> &'static Regex {
    REF_TYPE.get_or_init(|| {
        Regex::new(
            r"^\s*\(?\s*(React\.)?(Ref|RefObject|MutableRefObject|RefCallback|ForwardedRef|LegacyRef)\s*<",
        )
        .expect("ref type pattern is valid")
    })
}

/// Split a type at its top-level `|`, ignoring unions nested in brackets
fn union_members(type_text: &str) -> Vec<&str> {
    let mut members = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut prev = '\0';

    for (i, c) in type_text.char_indices() {
        match c {
            '<' | '(' | '[' | '{' => depth += 1,
            // `=>` closes nothing
            '>' if prev == '=' => {}
            '>' | ')' | ']' | '}' => depth = depth.saturating_sub(1),
            '|' if depth == 0 => {
                members.push(&type_text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        prev = c;
    }
    members.push(&type_text[start..]);
    members
}

/// A single declared prop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropDecl {
    pub name: String,

    /// Type as written in the component's declaration
    #[serde(rename = "type")]
    pub type_text: String,

    #[serde(default)]
    pub optional: bool,
}

impl PropDecl {
    pub fn new(name: impl Into<String>, type_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_text: type_text.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Named `ref`, or typed as one of React's ref types. In a union any
    /// top-level member counts, so `null | React.Ref<T>` is ref-shaped.
    pub fn is_ref_shaped(&self) -> bool {
        self.name == "ref"
            || union_members(&self.type_text)
                .into_iter()
                .any(|member| ref_type_pattern().is_match(member))
    }
}

/// What the caller knows about a component's declared props
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropShape {
    #[serde(default)]
    pub props: Vec<PropDecl>,

    /// Element or instance type the ref points at, e.g. `HTMLButtonElement`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_target: Option<String>,

    /// The component's own type parameters, e.g. `["T"]`
    #[serde(default)]
    pub generic_params: Vec<String>,

    /// Set when a ref prop is declared in a way the prop list cannot show
    /// (inherited props, intersections)
    #[serde(default)]
    pub ref_declared: bool,
}

impl PropShape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prop(mut self, prop: PropDecl) -> Self {
        self.props.push(prop);
        self
    }

    pub fn with_ref_target(mut self, target: impl Into<String>) -> Self {
        self.ref_target = Some(target.into());
        self
    }

    pub fn with_generic(mut self, param: impl Into<String>) -> Self {
        self.generic_params.push(param.into());
        self
    }

    pub fn with_ref_declared(mut self) -> Self {
        self.ref_declared = true;
        self
    }

    /// Name of the already declared ref-shaped prop, if there is one.
    /// An opaque declaration reports as `ref`.
    pub fn declared_ref_prop(&self) -> Option<&str> {
        self.props
            .iter()
            .find(|p| p.is_ref_shaped())
            .map(|p| p.name.as_str())
            .or(if self.ref_declared { Some("ref") } else { None })
    }

    pub fn prop_named(&self, name: &str) -> Option<&PropDecl> {
        self.props.iter().find(|p| p.name == name)
    }

    /// A prop literally named `ref` is declared, either listed or opaque
    pub fn declares_ref(&self) -> bool {
        self.ref_declared || self.prop_named("ref").is_some()
    }

    pub fn has_ref_prop(&self) -> bool {
        self.declared_ref_prop().is_some()
    }
}
