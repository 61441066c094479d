use std::path::PathBuf;

use termcolor::Buffer;
use thiserror::Error;

use crate::parser::prelude::{ParseError, ParseErrorType};
use super::diagnostic::{Diagnostic, Label, Location};
use super::src_span::SrcSpan;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("failed to parse source code")]
    Parse {
        path: PathBuf,
        src: String,
        errors: Vec<ParseError>,
    },
    #[error("program evaluation failed")]
    Runtime {
        message: String,
    },
    #[error("IO operation failed")]
    StdIo {
        err: std::io::ErrorKind,
    },
}

impl Error {
    pub fn pretty_string(&self) -> String {
        let mut nocolor = Buffer::no_color();
        self.pretty(&mut nocolor);
        String::from_utf8(nocolor.into_inner()).expect("Error printing produced invalid utf8")
    }

    pub fn pretty(&self, buf: &mut Buffer) {
        use std::io::Write;

        for diagnostic in self.to_diagnostics() {
            diagnostic.write(buf);
            writeln!(buf).expect("write new line diagnostic");
        }
    }

    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Error::Parse { path, src, errors } => {
                errors.iter()
                    .map(|error| {
                        let (label, extra) = error.details();
                        let text = extra.join("\n");

                        // an end-of-file error carries no position of
                        // its own, point it at the end of the source
                        let span = match error.error {
                            ParseErrorType::UnexpectedEof => SrcSpan {
                                start: src.len() as u32,
                                end: src.len() as u32,
                            },
                            _ => error.span,
                        };

                        Diagnostic {
                            title: "Syntax error".into(),
                            text,
                            location: Some(Location {
                                src,
                                path: path.clone(),
                                label: Label {
                                    text: Some(label),
                                    span,
                                },
                            }),
                        }
                    })
                    .collect()
            },
            Error::Runtime { message } => {
                vec![Diagnostic {
                    title: "Runtime error".into(),
                    text: message.clone(),
                    location: None,
                }]
            },
            Error::StdIo { err } => {
                vec![Diagnostic {
                    title: "Standard IO error".into(),
                    text: format!("{err}"),
                    location: None,
                }]
            },
        }
    }
}
