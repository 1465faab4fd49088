use quick_xml::events::Event;
use quick_xml::Reader;

use crate::errors::truncate_body;
use crate::Error;

/// Result of a successful login: the session cookie value to attach to
/// subsequent export requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginResponse {
    pub session_id: String,
}

impl LoginResponse {
    /// Parses the login XML body, e.g.
    /// `<status MFL_USER_ID="abc123...">OK</status>`.
    pub fn from_xml(body: &str) -> Result<Self, Error> {
        let mut reader = Reader::from_str(body);
        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) if e.name().as_ref() == b"status" => {
                    for attr in e.attributes() {
                        let attr = attr.map_err(|e| malformed(body, e))?;
                        if attr.key.as_ref() == b"MFL_USER_ID" {
                            let session_id =
                                attr.unescape_value().map_err(|e| malformed(body, e))?;
                            return Ok(Self {
                                session_id: session_id.into_owned(),
                            });
                        }
                    }
                    return Err(malformed(
                        body,
                        "status element carries no MFL_USER_ID attribute",
                    ));
                }
                Ok(Event::Eof) => return Err(malformed(body, "no status element in response")),
                Err(e) => return Err(malformed(body, e)),
                _ => {}
            }
        }
    }
}

fn malformed(body: &str, message: impl std::fmt::Display) -> Error {
    Error::MalformedResponse {
        message: message.to_string(),
        body: truncate_body(body),
    }
}
