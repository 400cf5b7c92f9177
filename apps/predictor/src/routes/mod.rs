use std::fmt;

/// Views the workflow can transition between. Operations that trigger a
/// navigation return the target instead of performing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Form,
    Results,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Form => "/predict",
            Route::Results => "/results",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Route::Form.path(), "/predict");
        assert_eq!(Route::Results.to_string(), "/results");
    }
}
