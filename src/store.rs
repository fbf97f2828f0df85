//! Abstract contracts for the annotation and document stores.
//!
//! The suggestion engine owns no persisted state: every training pass pulls
//! the current contents of these collaborators and rebuilds its classifiers
//! from scratch. The UI/persistence layer implements the traits; the
//! in-memory implementations here back the tests and serve as reference
//! implementations of the contracts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SibylError};

/// One coded span × variable combination, as stored by the annotation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodedSpan {
    /// Identifier of the owning statement.
    pub statement_id: i64,
    /// Identifier of the owning document.
    pub document_id: i64,
    /// Byte offset of the span start within the document text.
    pub start: usize,
    /// Byte offset one past the span end.
    pub end: usize,
    /// Name of the variable this value belongs to.
    pub variable: String,
    /// The resolved value the coder assigned.
    pub value: String,
    /// The span text, sliced from the document by the store.
    pub text: String,
}

/// Read access to coded spans.
pub trait AnnotationStore: Send + Sync {
    /// All coded spans with their resolved values, one row per coded span ×
    /// variable combination.
    fn coded_spans(&self) -> Result<Vec<CodedSpan>>;
}

/// Read access to document texts.
pub trait DocumentStore: Send + Sync {
    /// Enumerate all document ids.
    fn document_ids(&self) -> Result<Vec<i64>>;

    /// Fetch the full text of a document.
    fn document_text(&self, id: i64) -> Result<String>;
}

/// Data type of an annotation variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariableType {
    /// Yes/no flag.
    Boolean,
    /// Integer value.
    Integer,
    /// Short free-text value (the only type classifiers are trained on).
    ShortText,
    /// Long free-text value.
    LongText,
}

/// Schema entry for one annotation variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableDef {
    /// Variable name.
    pub name: String,
    /// Data type of the variable's values.
    pub data_type: VariableType,
}

/// Read access to the variable schema of the dominant statement type.
pub trait VariableSchema: Send + Sync {
    /// Variable names and data types of the dominant statement type.
    fn variables(&self) -> Result<Vec<VariableDef>>;
}

/// In-memory annotation store.
#[derive(Debug, Clone, Default)]
pub struct MemoryAnnotationStore {
    spans: Vec<CodedSpan>,
}

impl MemoryAnnotationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        MemoryAnnotationStore::default()
    }

    /// Add a coded span row.
    pub fn add_span(&mut self, span: CodedSpan) {
        self.spans.push(span);
    }
}

impl AnnotationStore for MemoryAnnotationStore {
    fn coded_spans(&self) -> Result<Vec<CodedSpan>> {
        Ok(self.spans.clone())
    }
}

/// In-memory document store.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    documents: BTreeMap<i64, String>,
}

impl MemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        MemoryDocumentStore::default()
    }

    /// Add a document.
    pub fn add_document<S: Into<String>>(&mut self, id: i64, text: S) {
        self.documents.insert(id, text.into());
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn document_ids(&self) -> Result<Vec<i64>> {
        Ok(self.documents.keys().copied().collect())
    }

    fn document_text(&self, id: i64) -> Result<String> {
        self.documents
            .get(&id)
            .cloned()
            .ok_or_else(|| SibylError::not_found(format!("document {id}")))
    }
}

/// In-memory variable schema.
#[derive(Debug, Clone, Default)]
pub struct MemoryVariableSchema {
    variables: Vec<VariableDef>,
}

impl MemoryVariableSchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        MemoryVariableSchema::default()
    }

    /// Add a variable definition.
    pub fn add_variable<S: Into<String>>(&mut self, name: S, data_type: VariableType) {
        self.variables.push(VariableDef {
            name: name.into(),
            data_type,
        });
    }
}

impl VariableSchema for MemoryVariableSchema {
    fn variables(&self) -> Result<Vec<VariableDef>> {
        Ok(self.variables.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_document_store() {
        let mut documents = MemoryDocumentStore::new();
        documents.add_document(1, "First document.");
        documents.add_document(2, "Second document.");

        assert_eq!(documents.document_ids().unwrap(), vec![1, 2]);
        assert_eq!(documents.document_text(2).unwrap(), "Second document.");
        assert!(documents.document_text(99).is_err());
    }

    #[test]
    fn test_memory_annotation_store() {
        let mut annotations = MemoryAnnotationStore::new();
        annotations.add_span(CodedSpan {
            statement_id: 1,
            document_id: 1,
            start: 0,
            end: 5,
            variable: "concept".to_string(),
            value: "taxes".to_string(),
            text: "First".to_string(),
        });

        let spans = annotations.coded_spans().unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].variable, "concept");
    }

    #[test]
    fn test_memory_variable_schema() {
        let mut schema = MemoryVariableSchema::new();
        schema.add_variable("concept", VariableType::ShortText);
        schema.add_variable("agreement", VariableType::Boolean);

        let variables = schema.variables().unwrap();
        assert_eq!(variables.len(), 2);
        assert_eq!(variables[0].data_type, VariableType::ShortText);
    }
}
