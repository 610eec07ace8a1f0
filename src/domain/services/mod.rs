pub mod generation;
pub mod profile_loader;
pub mod provisioning;
pub mod renderer;
pub mod resolver;
pub mod subdomain;
