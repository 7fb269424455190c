use super::residue::TitratableResidue;
use std::fmt;

/// Kind of psfgen statement emitted for a selected residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// `patch <CODE> CHA<chain>:<resid>`
    Patch,
    /// `mutate <resid> <CODE>`
    Mutate,
}

/// A single psfgen statement targeting one residue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub kind: DirectiveKind,
    pub code: &'static str,
    pub chain: String,
    pub residue_id: String,
}

impl Directive {
    pub fn for_residue(residue: TitratableResidue, chain: &str, residue_id: &str) -> Self {
        let behavior = residue.behavior();
        Self {
            kind: behavior.directive,
            code: behavior.psfgen_code,
            chain: chain.to_string(),
            residue_id: residue_id.to_string(),
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DirectiveKind::Mutate => write!(f, "mutate {} {}", self.residue_id, self.code),
            DirectiveKind::Patch => write!(
                f,
                "patch {} CHA{}:{}",
                self.code, self.chain, self.residue_id
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainDirectives {
    pub chain: String,
    directives: Vec<Directive>,
}

impl ChainDirectives {
    fn new(chain: &str) -> Self {
        Self {
            chain: chain.to_string(),
            directives: Vec::new(),
        }
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Directive> {
        self.directives.iter()
    }
}

/// Directives grouped by chain.
///
/// Chains keep the order in which they were first seen; directives keep
/// insertion order within their chain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectiveSet {
    chains: Vec<ChainDirectives>,
}

impl DirectiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, directive: Directive) {
        let index = match self.chains.iter().position(|c| c.chain == directive.chain) {
            Some(index) => index,
            None => {
                self.chains.push(ChainDirectives::new(&directive.chain));
                self.chains.len() - 1
            }
        };
        self.chains[index].directives.push(directive);
    }

    pub fn chain(&self, id: &str) -> Option<&ChainDirectives> {
        self.chains.iter().find(|c| c.chain == id)
    }

    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }

    pub fn directive_count(&self) -> usize {
        self.chains.iter().map(ChainDirectives::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    pub fn iter_chains(&self) -> std::slice::Iter<'_, ChainDirectives> {
        self.chains.iter()
    }

    pub fn iter_directives(&self) -> impl Iterator<Item = &Directive> {
        self.chains.iter().flat_map(|c| c.iter())
    }
}

impl fmt::Display for DirectiveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DirectiveSet {{ chains: {}, directives: {} }}",
            self.chain_count(),
            self.directive_count()
        )
    }
}
