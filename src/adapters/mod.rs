// Adapters layer: concrete implementations for external systems.

pub mod ads_udp;
