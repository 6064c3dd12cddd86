use std::collections::BTreeMap;

use super::html::{Element, HtmlNode, Tag};

/// Prose fields in emission order: `(name, singular label, plural label)`.
const KNOWN_FIELDS: &[(&str, &str, &str)] = &[
    ("summary", "Summary", "Summary"),
    ("note", "Note", "Notes"),
    ("version", "Version", "Versions"),
    ("todo", "To Do", "To Do"),
    ("see", "See Also", "See Also"),
    ("requires", "Requires", "Requires"),
    ("precondition", "Precondition", "Preconditions"),
    ("postcondition", "Postcondition", "Postconditions"),
    ("invariant", "Invariant", "Invariants"),
    ("status", "Status", "Status"),
    ("change", "Change Log", "Change Log"),
    ("permission", "Permission", "Permissions"),
    ("bug", "Bug", "Bugs"),
    ("since", "Since", "Since"),
    ("attention", "Attention", "Attention"),
    ("deprecated", "Deprecated", "Deprecated"),
    ("author", "Author", "Authors"),
    ("organization", "Organization", "Organizations"),
    ("copyright", "Copyright", "Copyright"),
    ("warning", "Warning", "Warnings"),
    ("license", "License", "Licenses"),
    ("contact", "Contact", "Contacts"),
];

/// Alternative spellings, matched case-insensitively.
const SYNONYMS: &[(&str, &str)] = &[
    ("parameter", "param"),
    ("arg", "param"),
    ("argument", "param"),
    ("returns", "return"),
    ("returntype", "rtype"),
    ("raises", "raise"),
    ("except", "raise"),
    ("exception", "raise"),
    ("variable", "var"),
    ("cvariable", "cvar"),
    ("ivariable", "ivar"),
    ("kwarg", "keyword"),
    ("kwparam", "keyword"),
    ("seealso", "see"),
    ("require", "requires"),
    ("requirement", "requires"),
    ("precond", "precondition"),
    ("postcond", "postcondition"),
    ("changed", "change"),
    ("authors", "author"),
    ("org", "organization"),
    ("(c)", "copyright"),
    ("warn", "warning"),
];

/// Normalized field name.
///
/// The derived order puts signature fields first, then known prose fields
/// by priority, then unknown names alphabetically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    Param,
    Type,
    Return,
    Rtype,
    Raise,
    Var,
    Cvar,
    Ivar,
    Keyword,
    /// Index into the known prose field table.
    Known(usize),
    Other(String),
}

impl FieldKey {
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        let canonical = SYNONYMS
            .iter()
            .find(|(alias, _)| *alias == lower)
            .map_or(lower.as_str(), |&(_, canonical)| canonical);

        match canonical {
            "param" => FieldKey::Param,
            "type" => FieldKey::Type,
            "return" => FieldKey::Return,
            "rtype" => FieldKey::Rtype,
            "raise" => FieldKey::Raise,
            "var" => FieldKey::Var,
            "cvar" => FieldKey::Cvar,
            "ivar" => FieldKey::Ivar,
            "keyword" => FieldKey::Keyword,
            other => match KNOWN_FIELDS.iter().position(|(known, ..)| *known == other) {
                Some(i) => FieldKey::Known(i),
                None => FieldKey::Other(other.to_string()),
            },
        }
    }

    /// Singular and plural labels of a prose field; `None` for fields
    /// rendered in the signature definition list.
    fn prose_labels(&self) -> Option<(String, String)> {
        match self {
            FieldKey::Known(i) => {
                let (_, singular, plural) = KNOWN_FIELDS[*i];
                Some((singular.to_string(), plural.to_string()))
            }
            FieldKey::Other(name) => {
                let label = capitalize(name);
                Some((label.clone(), label))
            }
            _ => None,
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One rendered field definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub arg: Option<String>,
    pub content: Vec<HtmlNode>,
}

/// Rendered field content grouped by normalized name, in definition order.
#[derive(Debug, Default)]
pub struct FieldTable {
    entries: BTreeMap<FieldKey, Vec<FieldDef>>,
}

impl FieldTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, arg: Option<String>, content: Vec<HtmlNode>) {
        let key = FieldKey::from_name(name);
        log::trace!("deferring field {name} as {key:?}");
        self.entries
            .entry(key)
            .or_default()
            .push(FieldDef { arg, content });
    }

    /// The signature list followed by the prose container, each only if
    /// it has something to show.
    pub fn into_html(self) -> Vec<HtmlNode> {
        let mut out = vec![];
        if let Some(dl) = self.signature() {
            out.push(dl);
        }
        if let Some(div) = self.prose() {
            out.push(div);
        }
        out
    }

    fn defs(&self, key: &FieldKey) -> &[FieldDef] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    fn signature(&self) -> Option<HtmlNode> {
        let mut dl = vec![];

        let params = self.parameter_items();
        if !params.is_empty() {
            dl.push(HtmlNode::element(Tag::Dt, vec![HtmlNode::text("Parameters:")]));
            dl.push(HtmlNode::element(
                Tag::Dd,
                vec![HtmlNode::element(Tag::Ul, params)],
            ));
        }

        let returns = self.defs(&FieldKey::Return);
        let rtype = self.defs(&FieldKey::Rtype);
        if !returns.is_empty() || !rtype.is_empty() {
            let mut dt = vec![HtmlNode::text("Returns:")];
            if let Some(ty) = rtype.last() {
                dt.push(HtmlNode::text(" "));
                dt.push(HtmlNode::element(Tag::I, unwrap_paragraph(&ty.content)));
            }
            dl.push(HtmlNode::element(Tag::Dt, dt));
            if let Some(ret) = returns.first() {
                dl.push(HtmlNode::element(Tag::Dd, unwrap_paragraph(&ret.content)));
            }
        }

        let mut raises = last_per_arg(self.defs(&FieldKey::Raise));
        if !raises.is_empty() {
            raises.sort_by(|a, b| a.arg.cmp(&b.arg));
            let items = raises
                .into_iter()
                .map(|def| entry_item(def.arg.as_deref(), None, &def.content))
                .collect();
            dl.push(HtmlNode::element(Tag::Dt, vec![HtmlNode::text("Raises:")]));
            dl.push(HtmlNode::element(
                Tag::Dd,
                vec![HtmlNode::element(Tag::Ul, items)],
            ));
        }

        (!dl.is_empty()).then(|| HtmlNode::element(Tag::Dl, dl))
    }

    /// `<li>` entries for param, keyword, ivar, var and cvar, then types
    /// no entry claimed.
    fn parameter_items(&self) -> Vec<HtmlNode> {
        let types = last_per_arg(self.defs(&FieldKey::Type));
        let type_of = |name: Option<&str>| {
            types
                .iter()
                .find(|t| t.arg.as_deref() == name)
                .map(|t| t.content.as_slice())
        };

        let mut items = vec![];
        let mut claimed: Vec<Option<&str>> = vec![];
        for key in [
            FieldKey::Param,
            FieldKey::Keyword,
            FieldKey::Ivar,
            FieldKey::Var,
            FieldKey::Cvar,
        ] {
            for def in last_per_arg(self.defs(&key)) {
                let name = def.arg.as_deref();
                claimed.push(name);
                items.push(entry_item(name, type_of(name), &def.content));
            }
        }
        for ty in &types {
            let name = ty.arg.as_deref();
            if !claimed.contains(&name) {
                items.push(entry_item(name, Some(ty.content.as_slice()), &[]));
            }
        }
        items
    }

    fn prose(&self) -> Option<HtmlNode> {
        let mut div = vec![];
        for (key, defs) in &self.entries {
            let Some((singular, plural)) = key.prose_labels() else {
                continue;
            };
            match defs.as_slice() {
                [def] => {
                    let mut p = vec![label(&singular), HtmlNode::text(" ")];
                    p.extend(prose_body(def));
                    div.push(HtmlNode::element(Tag::P, p));
                }
                defs => {
                    div.push(HtmlNode::element(Tag::P, vec![label(&plural)]));
                    let items = defs
                        .iter()
                        .map(|def| HtmlNode::element(Tag::Li, prose_body(def)))
                        .collect();
                    div.push(HtmlNode::element(Tag::Ul, items));
                }
            }
        }
        (!div.is_empty()).then(|| HtmlNode::element(Tag::Div, div))
    }
}

/// Keeps the last definition for each argument, positioned where that
/// last definition appeared.
fn last_per_arg(defs: &[FieldDef]) -> Vec<&FieldDef> {
    defs.iter()
        .enumerate()
        .filter(|(i, def)| !defs[i + 1..].iter().any(|later| later.arg == def.arg))
        .map(|(_, def)| def)
        .collect()
}

/// `<li><strong>name</strong> (<i>type</i>) - description</li>`, leaving out
/// whatever is missing.
fn entry_item(name: Option<&str>, ty: Option<&[HtmlNode]>, desc: &[HtmlNode]) -> HtmlNode {
    let mut li = vec![];
    if let Some(name) = name {
        li.push(HtmlNode::element(Tag::Strong, vec![HtmlNode::text(name)]));
    }
    if let Some(ty) = ty {
        li.push(HtmlNode::text(" ("));
        li.push(HtmlNode::element(Tag::I, unwrap_paragraph(ty)));
        li.push(HtmlNode::text(")"));
    }
    if !desc.is_empty() {
        if !li.is_empty() {
            li.push(HtmlNode::text(" - "));
        }
        li.extend(unwrap_paragraph(desc));
    }
    HtmlNode::element(Tag::Li, li)
}

fn prose_body(def: &FieldDef) -> Vec<HtmlNode> {
    let mut body = vec![];
    if let Some(arg) = &def.arg {
        body.push(HtmlNode::element(Tag::Code, vec![HtmlNode::text(arg)]));
        body.push(HtmlNode::text(" - "));
    }
    body.extend(unwrap_paragraph(&def.content));
    body
}

fn label(text: &str) -> HtmlNode {
    HtmlNode::element(Tag::Strong, vec![HtmlNode::text(format!("{text}:"))])
}

/// Content that is exactly one `<p>` is replaced by that paragraph's
/// children so it can sit inline.
fn unwrap_paragraph(content: &[HtmlNode]) -> Vec<HtmlNode> {
    match content {
        [HtmlNode::Element(Element { tag: Tag::P, children, .. })] => children.clone(),
        other => other.to_vec(),
    }
}
