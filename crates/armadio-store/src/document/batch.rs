use serde_json::{Map, Value};

/// One operation in an atomic multi-document commit.
#[derive(Debug, Clone)]
pub enum WriteOp {
    SetMerge {
        path: String,
        fields: Map<String, Value>,
    },
    Delete {
        path: String,
    },
}

/// Ordered set of writes committed in a single transaction.
#[derive(Debug, Clone, Default)]
pub struct WriteBatch {
    ops: Vec<WriteOp>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_merge(&mut self, path: impl Into<String>, fields: Map<String, Value>) {
        self.ops.push(WriteOp::SetMerge {
            path: path.into(),
            fields,
        });
    }

    pub fn delete(&mut self, path: impl Into<String>) {
        self.ops.push(WriteOp::Delete { path: path.into() });
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn ops(&self) -> &[WriteOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<WriteOp> {
        self.ops
    }
}
