//! Turns a captured exchange into the blocks of a [`Document`].
//!
//! Sections are produced by an ordered list of plain functions. Each one looks
//! at the [`Exchange`] and pushes zero or more blocks (or a diagnostic) into
//! the [`Assembly`]. The order of the list is the order in the output.
use crate::document::{Block, Document, Indent};
use crate::errors::{BlueprintError, BodySection};
use crate::naming::Naming;
use crate::net::{HttpRequest, HttpResponse};

/// Everything a section producer may look at.
#[derive(Debug, Clone, Copy)]
pub struct Exchange<'a> {
    pub action: &'a str,
    pub request: &'a HttpRequest,
    pub response: &'a HttpResponse,
    pub json_media_type: &'a str,
}

/// Blocks and diagnostics collected while building one document.
#[derive(Debug, Default)]
pub struct Assembly {
    blocks: Vec<Block>,
    diagnostics: Vec<BlueprintError>,
}

impl Assembly {
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn diagnose(&mut self, err: BlueprintError) {
        log::warn!("{err}; leaving the body out of the document");
        self.diagnostics.push(err);
    }
}

pub type SectionProducer = fn(&Exchange<'_>, &mut Assembly);

#[derive(Clone)]
pub struct ContentBlockBuilder {
    json_media_type: String,
    sections: Vec<SectionProducer>,
}

impl ContentBlockBuilder {
    pub fn new<S: Into<String>>(json_media_type: S) -> Self {
        Self {
            json_media_type: json_media_type.into(),
            sections: vec![
                header as SectionProducer,
                request_report,
                response_header,
                response_body,
            ],
        }
    }

    pub fn build(&self, naming: &Naming, request: &HttpRequest, response: &HttpResponse) -> Document {
        let exchange = Exchange {
            action: &naming.action,
            request,
            response,
            json_media_type: &self.json_media_type,
        };

        let mut assembly = Assembly::default();
        for section in &self.sections {
            section(&exchange, &mut assembly);
        }

        Document::new(naming.file_identifier.clone(), assembly.blocks, assembly.diagnostics)
    }
}

impl std::fmt::Debug for ContentBlockBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentBlockBuilder")
            .field("json_media_type", &self.json_media_type)
            .field("sections", &self.sections.len())
            .finish()
    }
}

impl Default for ContentBlockBuilder {
    fn default() -> Self {
        Self::new("application/json")
    }
}

/// Parses `body` as JSON and prints it back with two-space indentation, keeping key order.
pub fn pretty_json(body: &str) -> Result<String, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    serde_json::to_string_pretty(&value)
}

fn header(ex: &Exchange<'_>, out: &mut Assembly) {
    out.push(Block::flush(format!("# {}", ex.action)));
}

fn request_report(ex: &Exchange<'_>, out: &mut Assembly) {
    let request = ex.request;
    let authorization = request.authorization();
    if !request.has_body() && authorization.is_none() {
        return;
    }

    out.push(Block::flush(format!("+ Request {}", request.content_type())));

    if let Some(value) = authorization {
        out.push(Block::new(Indent::Section, format!("+ Headers\nAuthorization: {value}")));
    }

    if request.has_body() && request.content_type() == ex.json_media_type {
        match pretty_json(request.body()) {
            Ok(pretty) => {
                // Under a headers block everything moves one level deeper.
                let (marker, payload) = match authorization {
                    Some(_) => (Indent::Section, Indent::Deep),
                    None => (Indent::Flush, Indent::Nested),
                };
                out.push(Block::new(marker, "+ Body"));
                out.push(Block::new(payload, pretty));
            }
            Err(source) => out.diagnose(BlueprintError::BodyParse {
                section: BodySection::Request,
                source,
            }),
        }
    }
}

fn response_header(ex: &Exchange<'_>, out: &mut Assembly) {
    let response = ex.response;
    out.push(Block::flush(format!(
        "+ Response {} {}",
        response.status(),
        response.content_type()
    )));
}

fn response_body(ex: &Exchange<'_>, out: &mut Assembly) {
    let response = ex.response;
    if !response.has_body() || !response.content_type().contains(ex.json_media_type) {
        return;
    }

    match pretty_json(response.body()) {
        Ok(pretty) => out.push(Block::new(Indent::Nested, pretty)),
        Err(source) => out.diagnose(BlueprintError::BodyParse {
            section: BodySection::Response,
            source,
        }),
    }
}
