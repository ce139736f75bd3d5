mod binode_deck;
mod binode_hoop_v1;
mod binode_list_v1;
mod binode_list_v2;
mod binode_list_v3;
mod binode_queue;
mod segment_deck;
mod segment_hoop_v1;
mod segment_list_v1;
mod segment_list_v2;
mod segment_queue;
mod segment_stack;
mod uninode_list_v1;
mod uninode_list_v2;
mod uninode_list_v3;
mod uninode_queue;
mod uninode_stack;

pub use binode_deck::BinodeDeck;
pub use binode_hoop_v1::BinodeHoopV1;
pub use binode_list_v1::BinodeListV1;
pub use binode_list_v2::BinodeListV2;
pub use binode_list_v3::BinodeListV3;
pub use binode_queue::BinodeQueue;
pub use segment_deck::SegmentDeck;
pub use segment_hoop_v1::SegmentHoopV1;
pub use segment_list_v1::SegmentListV1;
pub use segment_list_v2::{SegmentListV2, SegmentPosition};
pub use segment_queue::SegmentQueue;
pub use segment_stack::SegmentStack;
pub use uninode_list_v1::UninodeListV1;
pub use uninode_list_v2::UninodeListV2;
pub use uninode_list_v3::UninodeListV3;
pub use uninode_queue::UninodeQueue;
pub use uninode_stack::UninodeStack;
