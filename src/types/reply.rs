use serde::Serialize;

/// Outcome tag of a `Reply`. Every operation in this crate succeeds or
/// returns an `Error`, so `Ok` is the only tag.
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize)]
pub enum Status {
   #[serde(rename = "ok")]
    Ok,
}

/// # Result pair
/// A `(status, value)` tuple returned by every operation.
///
/// Serializes as a two element array, e.g. `["ok","Hello Joe"]`
/// ```
/// use hello_pdf::hello;
///
/// let reply = hello("Joe");
/// assert_eq!(reply.to_json().unwrap(), r#"["ok","Hello Joe"]"#);
/// ```
#[derive(Debug,Clone,PartialEq,Eq,Serialize)]
pub struct Reply<T>(pub Status, pub T);

impl<T> Reply<T> {
    /// wraps `value` with the `Ok` tag
    pub fn ok(value: T) -> Self {
        Reply(Status::Ok, value)
    }

    pub fn status(&self) -> Status {
        self.0
    }

    pub fn value(&self) -> &T {
        &self.1
    }

    pub fn into_value(self) -> T {
        self.1
    }

    pub fn into_parts(self) -> (Status, T) {
        (self.0, self.1)
    }
}

impl<T: Serialize> Reply<T> {
    /// JSON encoding of the pair
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_sets_status() {
        let reply = Reply::ok(5);

        assert_eq!(reply.status(), Status::Ok);
        assert_eq!(*reply.value(), 5);
        assert_eq!(reply.into_parts(), (Status::Ok, 5));
    }

    #[test]
    fn serializes_as_pair() {
        let text = Reply::ok("PDF has been created!").to_json().unwrap();
        assert_eq!(text, r#"["ok","PDF has been created!"]"#);

        let number = Reply::ok(-3i128).to_json().unwrap();
        assert_eq!(number, r#"["ok",-3]"#);
    }
}
