pub mod ask;
pub mod mcp;
pub mod proxy;
pub mod serve;
