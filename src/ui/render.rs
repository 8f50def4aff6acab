//! Framework-free render tree.
//!
//! Views project their state into a [`Page`]; the CLI prints it through
//! `Display` and tests inspect it structurally.

use std::fmt;

use crate::ui::routes::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Heading { level: u8, text: String },
    Text(String),
    Link { label: String, to: Route },
    List(Vec<Node>),
    Button(String),
    Input {
        name: &'static str,
        label: &'static str,
        value: String,
    },
    Form(Vec<Node>),
    Nav(Vec<Node>),
}

impl Node {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Node::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn link(label: impl Into<String>, to: Route) -> Self {
        Node::Link {
            label: label.into(),
            to,
        }
    }

    pub fn button(label: impl Into<String>) -> Self {
        Node::Button(label.into())
    }

    fn children(&self) -> &[Node] {
        match self {
            Node::List(children) | Node::Form(children) | Node::Nav(children) => children.as_slice(),
            _ => &[],
        }
    }

    fn collect_links<'a>(&'a self, out: &mut Vec<(&'a str, &'a Route)>) {
        if let Node::Link { label, to } = self {
            out.push((label.as_str(), to));
        }
        for child in self.children() {
            child.collect_links(out);
        }
    }

    fn write_to(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = "  ".repeat(indent);
        match self {
            Node::Heading { level, text } => {
                writeln!(f, "{}{} {}", pad, "#".repeat(usize::from(*level)), text)
            }
            Node::Text(text) => writeln!(f, "{}{}", pad, text),
            Node::Link { label, to } => writeln!(f, "{}[{}]({})", pad, label, to),
            Node::Button(label) => writeln!(f, "{}[ {} ]", pad, label),
            Node::Input { label, value, .. } => writeln!(f, "{}{}: [{}]", pad, label, value),
            Node::List(items) => {
                for item in items {
                    write!(f, "{}- ", pad)?;
                    item.write_to(f, 0)?;
                }
                Ok(())
            }
            Node::Form(children) => {
                for child in children {
                    child.write_to(f, indent + 1)?;
                }
                Ok(())
            }
            Node::Nav(children) => {
                let parts: Vec<String> = children
                    .iter()
                    .map(|child| match child {
                        Node::Link { label, to } => format!("[{}]({})", label, to),
                        Node::Text(text) => text.clone(),
                        other => format!("{:?}", other),
                    })
                    .collect();
                writeln!(f, "{}{}", pad, parts.join(" | "))
            }
        }
    }
}

/// Output of a view's render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    View(Vec<Node>),
    /// Terminal state: the router should navigate here instead.
    Redirect(Route),
}

impl Page {
    pub fn nodes(&self) -> &[Node] {
        match self {
            Page::View(nodes) => nodes,
            Page::Redirect(_) => &[],
        }
    }

    pub fn redirect_target(&self) -> Option<&Route> {
        match self {
            Page::Redirect(route) => Some(route),
            Page::View(_) => None,
        }
    }

    /// Every link in document order as `(label, target)`.
    pub fn links(&self) -> Vec<(&str, &Route)> {
        let mut out = Vec::new();
        for node in self.nodes() {
            node.collect_links(&mut out);
        }
        out
    }

    /// Links inside lists only, i.e. excluding navigation chrome.
    pub fn list_links(&self) -> Vec<(&str, &Route)> {
        let mut out = Vec::new();
        for node in self.nodes() {
            if let Node::List(_) = node {
                node.collect_links(&mut out);
            }
        }
        out
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Redirect(route) => writeln!(f, "Redirect: {}", route),
            Page::View(nodes) => {
                for node in nodes {
                    node.write_to(f, 0)?;
                }
                Ok(())
            }
        }
    }
}
