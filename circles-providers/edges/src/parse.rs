//! Line-level parsing for the edge-list format.
use std::io::{self, BufRead};

use circles_core::Friendship;

use crate::errors::EdgeListError;

pub(crate) struct ParsedEdgeList {
    pub(crate) user_count: usize,
    pub(crate) friendships: Vec<Friendship>,
}

pub(crate) fn parse_edge_list<R: BufRead>(reader: R) -> Result<ParsedEdgeList, EdgeListError> {
    let mut user_count = None;
    let mut friendships = Vec::new();

    for (index, raw) in reader.lines().enumerate() {
        let line = index + 1;
        let raw = raw.map_err(|source| read_error(line, source))?;
        let Some(record) = significant(&raw) else {
            continue;
        };
        match user_count {
            None => user_count = Some(parse_header(line, record)?),
            Some(_) => friendships.push(parse_friendship(line, record)?),
        }
    }

    let user_count = user_count.ok_or(EdgeListError::MissingHeader)?;
    Ok(ParsedEdgeList {
        user_count,
        friendships,
    })
}

/// Strips comments and surrounding whitespace; `None` for lines with nothing
/// left.
fn significant(raw: &str) -> Option<&str> {
    let content = raw.split_once('#').map_or(raw, |(before, _)| before).trim();
    (!content.is_empty()).then_some(content)
}

fn read_error(line: usize, source: io::Error) -> EdgeListError {
    if source.kind() == io::ErrorKind::InvalidData {
        EdgeListError::InvalidEncoding { line, source }
    } else {
        EdgeListError::Io(source)
    }
}

/// Parses an unsigned decimal made of ASCII digits only, so signs are
/// rejected.
fn parse_unsigned(token: &str) -> Option<usize> {
    if token.is_empty() || !token.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

fn parse_header(line: usize, record: &str) -> Result<usize, EdgeListError> {
    parse_unsigned(record).ok_or_else(|| EdgeListError::InvalidHeader {
        line,
        content: record.to_owned(),
    })
}

fn parse_friendship(line: usize, record: &str) -> Result<Friendship, EdgeListError> {
    let mut tokens = record.split_whitespace();
    let (Some(left), Some(right), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(EdgeListError::MalformedEdge {
            line,
            content: record.to_owned(),
        });
    };
    Ok(Friendship::new(
        parse_user_id(line, left)?,
        parse_user_id(line, right)?,
    ))
}

fn parse_user_id(line: usize, token: &str) -> Result<usize, EdgeListError> {
    parse_unsigned(token).ok_or_else(|| EdgeListError::InvalidUserId {
        line,
        token: token.to_owned(),
    })
}
