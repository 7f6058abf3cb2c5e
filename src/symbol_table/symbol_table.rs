use crate::ast::ast::{NodeKind, TreeNode};

pub const SYMBOL_HASH_SIZE: usize = 211;

/// One variable of the program: its unique name, the memory slot assigned
/// at its first occurrence, and every source line it occurred on, in order
/// of appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableInfo {
    pub name: String,
    pub memloc: usize,
    pub lines: Vec<u32>,
}

/// Fixed-size hash-bucketed symbol table. Each bucket is an owned chain of
/// variables in insertion order; lookups walk the chain on exact name
/// equality, so collisions only cost a longer chain.
#[derive(Debug)]
pub struct SymbolTable {
    buckets: Vec<Vec<VariableInfo>>,
    num_vars: usize,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable {
            buckets: vec![Vec::new(); SYMBOL_HASH_SIZE],
            num_vars: 0,
        }
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn hash(name: &str) -> usize {
        let mut hash_val: usize = 11;
        for byte in name.bytes() {
            hash_val = (hash_val * 17 + byte as usize) % SYMBOL_HASH_SIZE;
        }
        hash_val
    }

    pub fn find(&self, name: &str) -> Option<&VariableInfo> {
        self.buckets[Self::hash(name)]
            .iter()
            .find(|var| var.name == name)
    }

    /// Records one occurrence of `name` on `line`. The first sighting of a
    /// name allocates the next sequential memory slot; later sightings only
    /// append the line to the existing occurrence list.
    pub fn insert(&mut self, name: &str, line: u32) {
        let bucket = &mut self.buckets[Self::hash(name)];

        if let Some(var) = bucket.iter_mut().find(|var| var.name == name) {
            var.lines.push(line);
            return;
        }

        bucket.push(VariableInfo {
            name: String::from(name),
            memloc: self.num_vars,
            lines: vec![line],
        });
        self.num_vars += 1;
    }

    /// All variables, walking buckets in index order and chains in
    /// insertion order. Order across buckets is not meaningful.
    pub fn variables(&self) -> impl Iterator<Item = &VariableInfo> {
        self.buckets.iter().flatten()
    }

    /// Renders the table, one `[Var=name][Mem=slot][Line=n]...` line per
    /// variable.
    pub fn report(&self) -> String {
        let mut out = String::new();
        for var in self.variables() {
            out.push_str(&format!("[Var={}][Mem={}]", var.name, var.memloc));
            for line in &var.lines {
                out.push_str(&format!("[Line={}]", line));
            }
            out.push('\n');
        }
        out
    }
}

/// Builds the symbol table in one preorder traversal of a completed tree:
/// the node itself, its children left-to-right, then the sibling chain.
/// Assign and Read targets are Identifier children, so every occurrence of
/// a variable goes through the Identifier arm.
pub fn build_symbol_table(root: &TreeNode) -> SymbolTable {
    let mut table = SymbolTable::new();
    visit(&mut table, root);
    table
}

fn visit(table: &mut SymbolTable, node: &TreeNode) {
    let mut current = Some(node);
    while let Some(node) = current {
        if let NodeKind::Identifier { name } = &node.kind {
            table.insert(name, node.line);
        }

        for child in node.children() {
            visit(table, child);
        }

        current = node.sibling.as_deref();
    }
}
