//! Sequence containers built from a small set of position capabilities.
//!
//! Storages come in revisions that trade bookkeeping for speed: `uninode`
//! (singly linked), `binode` (doubly linked) and `segment` (contiguous). Each
//! revision implements the structural concepts in [`traits`] it can support,
//! and every algorithm in [`algorithm`] runs over any of them through
//! [`position::Cursor`].

pub mod algorithm;
pub mod error;
pub mod impls;
pub mod node;
pub mod position;
mod ring;
pub mod traits;

pub use error::{Error, Result};
pub use impls::{
    BinodeDeck, BinodeHoopV1, BinodeListV1, BinodeListV2, BinodeListV3, BinodeQueue, SegmentDeck,
    SegmentHoopV1, SegmentListV1, SegmentListV2, SegmentPosition, SegmentQueue, SegmentStack,
    UninodeListV1, UninodeListV2, UninodeListV3, UninodeQueue, UninodeStack,
};
pub use node::{NodeId, NodePosition};
pub use position::{
    BidirectionalPosition, Cursor, ForwardPosition, IndexedSequence, Lap, RandomAccessPosition,
    ReverseSequence, Sequence, SequenceMut, Span,
};
pub use traits::{BidirectionalList, Deck, Hoop, List, Queue, Stack};

pub type UninodeList<T> = UninodeListV3<T>;
pub type BinodeList<T> = BinodeListV3<T>;
pub type SegmentList<T> = SegmentListV2<T>;
