//! Adapter-defined nodes.
//!
//! An [`ExtensionNode`] lets an adapter hang its own data off the tree
//! without a dedicated node type. The payload decides what counts as the same
//! intent (its key) and whether it can be duplicated; a payload that cannot
//! makes copying the node, and every tree that owns it, fail.

use intent_core::{SymbolResolver, SyntaxHandle, Value};
use intent_tree::{CompareOptions, CopyNode, IntentNode, NodeBase, TreeError, TreeResult};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Data carried by an [`ExtensionNode`].
pub trait ExtensionPayload: fmt::Debug + Send + Sync {
    /// Payloads with equal keys have the same intent.
    fn intent_key(&self) -> String;

    /// An independent copy, or `None` when the payload cannot be copied.
    fn duplicate(&self) -> Option<Box<dyn ExtensionPayload>>;

    /// Human-readable summary used in errors.
    fn describe(&self) -> String {
        self.intent_key()
    }
}

/// A payload that is just a copyable value under a tag.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedPayload {
    pub tag: String,
    pub value: Value,
}

impl TaggedPayload {
    pub fn new(tag: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
        }
    }
}

impl ExtensionPayload for TaggedPayload {
    fn intent_key(&self) -> String {
        format!("{}={}", self.tag, self.value)
    }

    fn duplicate(&self) -> Option<Box<dyn ExtensionPayload>> {
        Some(Box::new(self.clone()))
    }
}

#[derive(Debug)]
pub struct ExtensionNode {
    base: NodeBase,
    payload: Box<dyn ExtensionPayload>,
}

impl ExtensionNode {
    pub fn new(name: impl Into<String>, payload: Box<dyn ExtensionPayload>) -> Self {
        Self {
            base: NodeBase::detached(name, "extension"),
            payload,
        }
    }

    pub fn bind(
        raw: SyntaxHandle,
        resolver: Arc<dyn SymbolResolver>,
        payload: Box<dyn ExtensionPayload>,
    ) -> Self {
        Self {
            base: NodeBase::bind(raw, resolver),
            payload,
        }
    }

    pub fn payload(&self) -> &dyn ExtensionPayload {
        self.payload.as_ref()
    }
}

impl IntentNode for ExtensionNode {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        "extension"
    }

    fn copy_boxed(&self) -> TreeResult<Box<dyn IntentNode>> {
        Ok(Box::new(self.copy()?))
    }

    fn same_content(&self, other: &dyn IntentNode, _options: &CompareOptions) -> bool {
        other
            .as_any()
            .downcast_ref::<ExtensionNode>()
            .is_some_and(|other| self.payload.intent_key() == other.payload.intent_key())
    }
}

impl CopyNode for ExtensionNode {
    fn copy(&self) -> TreeResult<Self> {
        let Some(payload) = self.payload.duplicate() else {
            warn!(node = %self.base.id(), payload = %self.payload.describe(), "extension payload cannot be copied");
            return Err(TreeError::clone_construction(
                self.kind(),
                self.base.name(),
                format!("payload '{}' has no copy path", self.payload.describe()),
            ));
        };
        Ok(Self {
            base: self.base.copy_base(),
            payload,
        })
    }
}
