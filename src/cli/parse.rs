use graphwalk_core::graph::{NodeId, View};

/// Parse an adjacency view from string
pub fn parse_view(s: &str) -> std::result::Result<View, String> {
    s.parse::<View>().map_err(|e| e.to_string())
}

/// Parse a comma-separated list of node ids
pub fn parse_node_list(s: &str) -> std::result::Result<Vec<NodeId>, String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<NodeId>()
                .map_err(|_| format!("invalid node id: {}", part))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_node_list() {
        assert_eq!(parse_node_list("4").unwrap(), vec![4]);
        assert_eq!(parse_node_list("1, 5,9,").unwrap(), vec![1, 5, 9]);
        assert!(parse_node_list("1,x").unwrap_err().contains("x"));
    }

    #[test]
    fn test_parse_view() {
        assert_eq!(parse_view("dual").unwrap(), View::Dual);
        assert!(parse_view("sideways").is_err());
    }
}
