//! # Ports Layer
//!
//! Outbound collaborator traits. The processor's inbound surface is just the
//! constructor and [`crate::processor::PeerAuthenticationRequestsProcessor::close`].

pub mod outbound;

pub use outbound::{
    MockNodesCoordinator, MockPeerAuthCache, MockRequestHandler, NodesCoordinator,
    PeerAuthenticationCache, RequestHandler,
};
