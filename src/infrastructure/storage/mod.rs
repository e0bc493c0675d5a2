mod request_workspace;

pub use request_workspace::RequestWorkspace;
