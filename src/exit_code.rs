use crate::error::ExportError;

pub fn exit_code_for_error(err: &ExportError) -> i32 {
    match err {
        ExportError::Config(_) => 2,
        ExportError::Unsupported(_) => 4,
        ExportError::PermissionDenied(_) | ExportError::FileNotFound(_) => 37,
        ExportError::Io(_) => 23,
        ExportError::BrowserCookie(_) => 43,
        ExportError::OutputExists(_) => 73,
    }
}
