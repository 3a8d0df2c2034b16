use crate::requirement::RouteTableError;

/// Normalize a requested path before matching.
///
/// Strips any query string or fragment and trims trailing slashes (the root
/// path stays `/`). Matching is otherwise exact and case-sensitive.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let mut path = &path[..end];
    while path.len() > 1 && path.ends_with('/') {
        path = &path[..path.len() - 1];
    }
    path
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    /// `:name` placeholder; matches any single non-empty segment.
    Param(String),
}

/// A navigable path pattern, e.g. `/admin/surveys` or `/surveys/:id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Result<Self, RouteTableError> {
        let invalid = |reason: &str| RouteTableError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        if !pattern.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }

        let trimmed = normalize_path(pattern);
        let mut segments = Vec::new();
        if trimmed != "/" {
            for seg in trimmed[1..].split('/') {
                if seg.is_empty() {
                    return Err(invalid("empty segment"));
                }
                if let Some(name) = seg.strip_prefix(':') {
                    if name.is_empty() {
                        return Err(invalid("unnamed parameter segment"));
                    }
                    segments.push(Segment::Param(name.to_string()));
                } else {
                    segments.push(Segment::Literal(seg.to_string()));
                }
            }
        }

        Ok(Self {
            raw: trimmed.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether an already-normalized path matches this pattern.
    pub fn matches(&self, path: &str) -> bool {
        if path == "/" {
            return self.segments.is_empty();
        }
        let Some(rest) = path.strip_prefix('/') else {
            return false;
        };

        let mut parts = rest.split('/');
        for segment in &self.segments {
            let Some(part) = parts.next() else {
                return false;
            };
            let matched = match segment {
                Segment::Literal(lit) => lit == part,
                Segment::Param(_) => !part.is_empty(),
            };
            if !matched {
                return false;
            }
        }
        parts.next().is_none()
    }
}

impl core::fmt::Display for PathPattern {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_strips_query_and_trailing_slash() {
        assert_eq!(normalize_path("/dashboard/"), "/dashboard");
        assert_eq!(normalize_path("/dashboard?tab=2"), "/dashboard");
        assert_eq!(normalize_path("/dashboard/#top"), "/dashboard");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("//"), "/");
    }

    #[test]
    fn literal_patterns_match_exactly() {
        let p = PathPattern::parse("/admin/surveys").unwrap();
        assert!(p.matches("/admin/surveys"));
        assert!(!p.matches("/admin"));
        assert!(!p.matches("/admin/surveys/7"));
        assert!(!p.matches("/Admin/Surveys"));
    }

    #[test]
    fn param_segments_match_any_value() {
        let p = PathPattern::parse("/surveys/:id").unwrap();
        assert!(p.matches("/surveys/42"));
        assert!(p.matches("/surveys/abc-def"));
        assert!(!p.matches("/surveys"));
        assert!(!p.matches("/surveys/42/answers"));
    }

    #[test]
    fn malformed_patterns_are_rejected() {
        assert!(PathPattern::parse("dashboard").is_err());
        assert!(PathPattern::parse("/a//b").is_err());
        assert!(PathPattern::parse("/surveys/:").is_err());
    }
}
