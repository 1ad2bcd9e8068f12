use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Load balancer not found: {0}")]
    LoadBalancerNotFound(String),
}
