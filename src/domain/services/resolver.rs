use tracing::warn;

use crate::domain::models::workspace::Workspace;
use crate::domain::ports::WorkspaceRepository;

const RESERVED_SUBDOMAINS: [&str; 3] = ["www", "app", "admin"];

/// Extracts the candidate subdomain label from a hostname. Hostnames with
/// fewer than three labels carry no subdomain; reserved labels never
/// resolve to a workspace.
pub fn subdomain_from_host(hostname: &str) -> Option<&str> {
    let mut parts = hostname.split('.');
    let first = parts.next()?;

    // Need at least two more labels after the candidate (a bare domain or
    // single-level host has no subdomain).
    if parts.count() < 2 {
        return None;
    }

    if RESERVED_SUBDOMAINS.contains(&first) {
        return None;
    }

    Some(first)
}

/// Maps an inbound hostname to an active workspace: custom-domain match
/// first, then subdomain parsing. A resolution miss is a valid outcome, and
/// lookup failures degrade to a miss rather than propagating.
pub async fn resolve(repo: &dyn WorkspaceRepository, hostname: &str) -> Option<Workspace> {
    let hostname = hostname.to_ascii_lowercase();

    match repo.find_active_by_custom_domain(&hostname).await {
        Ok(Some(workspace)) => return Some(workspace),
        Ok(None) => {}
        Err(e) => {
            warn!("Custom domain lookup failed for {}: {}", hostname, e);
        }
    }

    let subdomain = subdomain_from_host(&hostname)?;

    match repo.find_active_by_subdomain(subdomain).await {
        Ok(found) => found,
        Err(e) => {
            warn!("Subdomain lookup failed for {}: {}", subdomain, e);
            None
        }
    }
}
