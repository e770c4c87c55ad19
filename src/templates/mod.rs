//! Prompt template registry and placeholder hydration.
//!
//! Templates use `{NAME}` placeholders where `NAME` is an uppercase token:
//!
//! ```text
//! You are a patient tutor helping a Class {CLASS_NUMBER} student.
//! Answer the student's question: "{STUDENT_QUESTION}"
//! ```
//!
//! Hydration is a single pass over the template. Placeholders with no value
//! in the map are left verbatim, and substituted values are never scanned
//! again, so a value that itself looks like `{OTHER}` reaches the output
//! untouched.

mod catalog;

use crate::tools::ToolId;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;
use thiserror::Error;

/// Placeholder name → value, built fresh for every submission.
pub type VariableMap = HashMap<String, String>;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Z][A-Z0-9_]*)\}").expect("placeholder pattern is valid"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("No prompt template registered for tool: {tool}")]
    NotFound { tool: ToolId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    tool: ToolId,
    body: &'static str,
}

impl PromptTemplate {
    pub fn tool(&self) -> ToolId {
        self.tool
    }

    pub fn body(&self) -> &'static str {
        self.body
    }

    /// Distinct placeholder names, in order of first appearance.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for caps in PLACEHOLDER.captures_iter(self.body) {
            if let Some(name) = caps.get(1).map(|m| m.as_str()) {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    pub fn hydrate(&self, variables: &VariableMap) -> Hydrated {
        hydrate_with_report(self.body, variables)
    }
}

/// Result of a hydration pass that also tracks what it could not fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hydrated {
    pub text: String,
    /// Placeholder names left in `text`, deduplicated, in template order.
    pub unresolved: Vec<String>,
}

impl Hydrated {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Substitutes every `{NAME}` found in `template` with `variables[NAME]`.
pub fn hydrate(template: &str, variables: &VariableMap) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match variables.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Same pass as [`hydrate`], reporting the placeholders that had no value.
pub fn hydrate_with_report(template: &str, variables: &VariableMap) -> Hydrated {
    let mut unresolved: Vec<String> = Vec::new();
    let text = PLACEHOLDER
        .replace_all(template, |caps: &Captures| match variables.get(&caps[1]) {
            Some(value) => value.clone(),
            None => {
                if !unresolved.iter().any(|name| name == &caps[1]) {
                    unresolved.push(caps[1].to_string());
                }
                caps[0].to_string()
            }
        })
        .into_owned();

    Hydrated { text, unresolved }
}

/// Fixed association of tool → template, built once at startup.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: HashMap<ToolId, PromptTemplate>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        let templates = ToolId::ALL
            .iter()
            .filter_map(|&tool| {
                catalog::template_for(tool).map(|body| (tool, PromptTemplate { tool, body }))
            })
            .collect();

        Self { templates }
    }

    pub fn get(&self, tool: ToolId) -> Result<&PromptTemplate, TemplateError> {
        self.templates
            .get(&tool)
            .ok_or(TemplateError::NotFound { tool })
    }

    pub fn contains(&self, tool: ToolId) -> bool {
        self.templates.contains_key(&tool)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PromptTemplate> {
        self.templates.values()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
