use crate::config::PageSettings;
use crate::errors::AppError;
use crate::models::page::{PageRequest, Sort};

/// Raw `page`, `size` and `sort` query parameters. `sort` may repeat; each value
/// contributes its orders in the sequence given.
#[derive(Debug, Default)]
pub struct PageParams {
    page: Option<i64>,
    size: Option<i64>,
    sort: Vec<String>,
}

impl PageParams {
    /// Collects paging parameters from decoded query pairs, ignoring unrelated keys.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, AppError> {
        let mut params = PageParams::default();
        for (key, value) in pairs {
            match key.as_str() {
                "page" => params.page = Some(parse_number(&key, &value)?),
                "size" => params.size = Some(parse_number(&key, &value)?),
                "sort" => params.sort.push(value),
                _ => {}
            }
        }
        Ok(params)
    }

    /// Negative pages clamp to 0, sizes below 1 fall back to the default and sizes
    /// above the maximum are capped.
    pub fn into_request(self, settings: &PageSettings) -> Result<PageRequest, AppError> {
        let page = self.page.unwrap_or(0).clamp(0, i64::from(u32::MAX)) as u32;
        let size = match self.size {
            Some(size) if size >= 1 => size.min(i64::from(settings.max_size)) as u32,
            _ => settings.default_size,
        };

        let mut sort = Sort::unsorted();
        for raw in &self.sort {
            let parsed = Sort::parse(raw).map_err(AppError::BadRequest)?;
            sort.orders.extend(parsed.orders);
        }

        Ok(PageRequest::new(page, size, sort))
    }
}

fn parse_number(key: &str, value: &str) -> Result<i64, AppError> {
    value.trim().parse().map_err(|_| {
        AppError::BadRequest(format!(
            "Query parameter '{}' must be an integer, got '{}'",
            key, value
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::page::{Direction, SortProperty};

    fn pairs(query: &[(&str, &str)]) -> Vec<(String, String)> {
        query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn request(query: &[(&str, &str)], settings: &PageSettings) -> Result<PageRequest, AppError> {
        PageParams::from_pairs(pairs(query))?.into_request(settings)
    }

    #[test]
    fn defaults_when_absent() {
        let request = request(&[], &PageSettings::default()).unwrap();
        assert_eq!(request, PageRequest::new(0, 10, Sort::unsorted()));
    }

    #[test]
    fn clamps_out_of_range_values() {
        let settings = PageSettings { default_size: 10, max_size: 50 };
        let paged = request(&[("page", "-3"), ("size", "500")], &settings).unwrap();
        assert_eq!(paged.page, 0);
        assert_eq!(paged.size, 50);

        let paged = request(&[("page", "2"), ("size", "0")], &settings).unwrap();
        assert_eq!(paged.page, 2);
        assert_eq!(paged.size, 10);
        assert_eq!(paged.offset(), 20);
    }

    #[test]
    fn parses_sort_and_rejects_unknown_properties() {
        let paged = request(&[("sort", "position,desc")], &PageSettings::default()).unwrap();
        assert_eq!(paged.sort.orders[0].property, SortProperty::Position);

        let err = request(&[("sort", "salary")], &PageSettings::default()).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn repeated_sort_values_chain_in_order() {
        let paged = request(
            &[("sort", "name,desc"), ("sort", "position")],
            &PageSettings::default(),
        )
        .unwrap();
        let orders: Vec<_> = paged
            .sort
            .orders
            .iter()
            .map(|o| (o.property, o.direction))
            .collect();
        assert_eq!(
            orders,
            vec![
                (SortProperty::Name, Direction::Desc),
                (SortProperty::Position, Direction::Asc),
            ]
        );
        assert_eq!(paged.sort.to_sql(), "name DESC, position ASC, id ASC");
    }

    #[test]
    fn non_numeric_page_is_rejected() {
        let err = PageParams::from_pairs(pairs(&[("page", "first")])).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn unrelated_parameters_are_ignored() {
        let paged = request(&[("q", "anything"), ("size", "5")], &PageSettings::default()).unwrap();
        assert_eq!(paged.size, 5);
    }
}
