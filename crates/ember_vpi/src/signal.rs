//! Signal descriptors: the handle-side view of a multi-bit wire or register.

use crate::cell::{CellRange, CellSource};
use crate::error::VpiError;
use crate::scope::{ScopeId, ScopeResolver};
use ember_common::{ArenaId, Ident, Logic, LogicVec};
use serde::{Deserialize, Serialize};

/// Object-model tag of a signal. Value semantics are identical for both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalKind {
    /// A variable (`reg`).
    Reg,
    /// A net (`wire`).
    Net,
}

/// Integer properties answerable for any signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Property {
    /// Number of bits.
    Size,
    /// 1 if declared signed, else 0.
    Signed,
    /// Cell ID of a single-bit signal, else 0.
    NexusId,
}

/// A named multi-bit signal bound to a run of cells.
///
/// Bit index 0 is always the `lsb` end of the declared range, whether the
/// range is descending (`[7:0]`) or ascending (`[0:7]`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalDescriptor {
    name: Ident,
    msb: i32,
    lsb: i32,
    signed: bool,
    bits: CellRange,
    scope: ScopeId,
    kind: SignalKind,
}

impl SignalDescriptor {
    /// Binds a net to `bits` in the resolver's current scope.
    pub fn make_net(
        name: Ident,
        msb: i32,
        lsb: i32,
        signed: bool,
        bits: CellRange,
        scopes: &impl ScopeResolver,
    ) -> Result<Self, VpiError> {
        Self::make(SignalKind::Net, name, msb, lsb, signed, bits, scopes)
    }

    /// Binds a register to `bits` in the resolver's current scope.
    pub fn make_reg(
        name: Ident,
        msb: i32,
        lsb: i32,
        signed: bool,
        bits: CellRange,
        scopes: &impl ScopeResolver,
    ) -> Result<Self, VpiError> {
        Self::make(SignalKind::Reg, name, msb, lsb, signed, bits, scopes)
    }

    fn make(
        kind: SignalKind,
        name: Ident,
        msb: i32,
        lsb: i32,
        signed: bool,
        bits: CellRange,
        scopes: &impl ScopeResolver,
    ) -> Result<Self, VpiError> {
        let span = (i64::from(msb) - i64::from(lsb)).unsigned_abs() + 1;
        if span != u64::from(bits.width()) {
            log::error!(
                "signal `{}` declared [{msb}:{lsb}] but bound to {} cells",
                scopes.resolve_name(name),
                bits.width()
            );
            return Err(VpiError::RangeMismatch {
                msb,
                lsb,
                cells: bits.width(),
            });
        }
        let scope = scopes.current_scope();
        log::debug!(
            "bound {kind:?} `{}` [{msb}:{lsb}] in scope {}",
            scopes.resolve_name(name),
            scope.as_raw()
        );
        Ok(Self {
            name,
            msb,
            lsb,
            signed,
            bits,
            scope,
            kind,
        })
    }

    /// Number of bits, `|msb - lsb| + 1`.
    pub fn width(&self) -> u32 {
        self.bits.width()
    }

    /// Answer to a size query. Same as [`width`](Self::width).
    pub fn size(&self) -> u32 {
        self.width()
    }

    /// Declared most significant index.
    pub fn msb(&self) -> i32 {
        self.msb
    }

    /// Declared least significant index.
    pub fn lsb(&self) -> i32 {
        self.lsb
    }

    /// Whether the signal was declared signed.
    pub fn is_signed(&self) -> bool {
        self.signed
    }

    /// Whether the declared range counts upward from the msb (`[0:7]`).
    pub fn is_ascending(&self) -> bool {
        self.msb < self.lsb
    }

    /// The bound cells.
    pub fn bits(&self) -> &CellRange {
        &self.bits
    }

    /// Reg or net.
    pub fn kind(&self) -> SignalKind {
        self.kind
    }

    /// Scope captured at construction.
    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    /// Interned leaf name.
    pub fn name_ident(&self) -> Ident {
        self.name
    }

    /// Cell ID of bit 0 for a single-bit signal, else 0.
    pub fn nexus_id(&self) -> u32 {
        if self.width() == 1 {
            self.bits.cell(0).as_raw()
        } else {
            0
        }
    }

    /// Answers an integer property query.
    pub fn get(&self, property: Property) -> i64 {
        match property {
            Property::Size => i64::from(self.width()),
            Property::Signed => i64::from(self.signed),
            Property::NexusId => i64::from(self.nexus_id()),
        }
    }

    /// Leaf name.
    pub fn name<'r>(&self, scopes: &'r impl ScopeResolver) -> &'r str {
        scopes.resolve_name(self.name)
    }

    /// Dot-separated hierarchical name, `scope.name`.
    pub fn full_name(&self, scopes: &impl ScopeResolver) -> String {
        let path = scopes.scope_full_path(self.scope);
        let name = scopes.resolve_name(self.name);
        if path.is_empty() {
            name.to_string()
        } else {
            format!("{path}.{name}")
        }
    }

    /// State of bit `index` (0 = lsb).
    pub fn bit(&self, cells: &impl CellSource, index: u32) -> Logic {
        cells.cell_state(&self.bits, index)
    }

    /// Snapshot of every bit, index 0 first.
    pub fn snapshot(&self, cells: &impl CellSource) -> LogicVec {
        (0..self.width()).map(|i| self.bit(cells, i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellNetwork;
    use crate::scope::ScopeTree;

    #[test]
    fn descending_range_width() {
        let mut net = CellNetwork::new();
        let mut scopes = ScopeTree::new();
        scopes.push_scope("top");
        let bits = net.alloc(8, Logic::X);
        let sig =
            SignalDescriptor::make_reg(scopes.intern("data"), 7, 0, false, bits, &scopes).unwrap();
        assert_eq!(sig.width(), 8);
        assert_eq!(sig.size(), 8);
        assert_eq!(sig.get(Property::Size), 8);
        assert!(!sig.is_ascending());
        assert_eq!(sig.kind(), SignalKind::Reg);
    }

    #[test]
    fn ascending_range_width() {
        let mut net = CellNetwork::new();
        let scopes = ScopeTree::new();
        let bits = net.alloc(4, Logic::Zero);
        let sig =
            SignalDescriptor::make_net(scopes.intern("bus"), 3, 6, true, bits, &scopes).unwrap();
        assert_eq!(sig.width(), 4);
        assert!(sig.is_ascending());
        assert!(sig.is_signed());
        assert_eq!(sig.get(Property::Signed), 1);
        assert_eq!(sig.kind(), SignalKind::Net);
    }

    #[test]
    fn range_mismatch_rejected() {
        let mut net = CellNetwork::new();
        let scopes = ScopeTree::new();
        let bits = net.alloc(4, Logic::Zero);
        let err = SignalDescriptor::make_net(scopes.intern("w"), 7, 0, false, bits, &scopes)
            .unwrap_err();
        assert!(matches!(
            err,
            VpiError::RangeMismatch {
                msb: 7,
                lsb: 0,
                cells: 4
            }
        ));
    }

    #[test]
    fn captures_current_scope() {
        let mut net = CellNetwork::new();
        let mut scopes = ScopeTree::new();
        let top = scopes.push_scope("top");
        let core = scopes.push_scope("core");
        let a = SignalDescriptor::make_net(
            scopes.intern("a"),
            0,
            0,
            false,
            net.alloc(1, Logic::Z),
            &scopes,
        )
        .unwrap();
        scopes.pop_scope();
        let b = SignalDescriptor::make_reg(
            scopes.intern("b"),
            1,
            0,
            false,
            net.alloc(2, Logic::Z),
            &scopes,
        )
        .unwrap();
        assert_eq!(a.scope(), core);
        assert_eq!(b.scope(), top);
        assert_eq!(a.full_name(&scopes), "top.core.a");
        assert_eq!(b.full_name(&scopes), "top.b");
        assert_eq!(a.name(&scopes), "a");
    }

    #[test]
    fn root_scope_full_name_is_leaf() {
        let mut net = CellNetwork::new();
        let scopes = ScopeTree::new();
        let sig = SignalDescriptor::make_net(
            scopes.intern("clk"),
            0,
            0,
            false,
            net.alloc(1, Logic::Zero),
            &scopes,
        )
        .unwrap();
        assert_eq!(sig.full_name(&scopes), "clk");
    }

    #[test]
    fn nexus_id_single_bit_only() {
        let mut net = CellNetwork::new();
        let scopes = ScopeTree::new();
        net.alloc(5, Logic::Zero);
        let one = SignalDescriptor::make_net(
            scopes.intern("en"),
            0,
            0,
            false,
            net.alloc(1, Logic::Zero),
            &scopes,
        )
        .unwrap();
        let wide = SignalDescriptor::make_net(
            scopes.intern("q"),
            3,
            0,
            false,
            net.alloc(4, Logic::Zero),
            &scopes,
        )
        .unwrap();
        assert_eq!(one.nexus_id(), 5);
        assert_eq!(one.get(Property::NexusId), 5);
        assert_eq!(wide.nexus_id(), 0);
    }

    #[test]
    fn snapshot_is_lsb_first() {
        let mut net = CellNetwork::new();
        let scopes = ScopeTree::new();
        let pattern = LogicVec::from_binary_str("1x0z").unwrap();
        let bits = net.alloc_pattern(&pattern);
        let sig =
            SignalDescriptor::make_reg(scopes.intern("r"), 0, 3, false, bits, &scopes).unwrap();
        assert_eq!(sig.bit(&net, 0), Logic::Z);
        assert_eq!(sig.bit(&net, 3), Logic::One);
        assert_eq!(sig.snapshot(&net), pattern);
    }
}
