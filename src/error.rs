use crate::auth::Role;

/// A required form field was left empty.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
	#[error("All fields are required!")]
	AllFieldsRequired,
	#[error("Please fill in all fields.")]
	IncompleteDraft,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
	#[error("Invalid credentials. Please try again.")]
	InvalidCredentials,
}

#[derive(thiserror::Error, Debug)]
pub enum SessionError {
	#[error("Session storage is unavailable: {0}")]
	Storage(String),
	#[error(transparent)]
	Encoding(#[from] serde_json::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum LoginError {
	#[error(transparent)]
	Validation(#[from] ValidationError),
	#[error(transparent)]
	Auth(#[from] AuthError),
	#[error(transparent)]
	Session(#[from] SessionError),
}

/// Why the route guard refused to render a protected view.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDenied {
	#[error("no one is logged in")]
	Anonymous,
	#[error("role {0:?} is not allowed here")]
	Role(Role),
}
