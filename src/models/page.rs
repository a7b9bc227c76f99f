use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use crate::models::employee::Employee;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortProperty {
    Id,
    OrganizationId,
    DepartmentId,
    Name,
    Birthdate,
    Position,
}

impl SortProperty {
    /// Resolves a wire (camelCase) property name.
    pub fn from_param(name: &str) -> Option<Self> {
        match name {
            "id" => Some(SortProperty::Id),
            "organizationId" => Some(SortProperty::OrganizationId),
            "departmentId" => Some(SortProperty::DepartmentId),
            "name" => Some(SortProperty::Name),
            "birthdate" => Some(SortProperty::Birthdate),
            "position" => Some(SortProperty::Position),
            _ => None,
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            SortProperty::Id => "id",
            SortProperty::OrganizationId => "organization_id",
            SortProperty::DepartmentId => "department_id",
            SortProperty::Name => "name",
            SortProperty::Birthdate => "birthdate",
            SortProperty::Position => "position",
        }
    }

    fn compare(&self, a: &Employee, b: &Employee) -> Ordering {
        match self {
            SortProperty::Id => a.id.cmp(&b.id),
            SortProperty::OrganizationId => a.organization_id.cmp(&b.organization_id),
            SortProperty::DepartmentId => a.department_id.cmp(&b.department_id),
            SortProperty::Name => a.name.cmp(&b.name),
            SortProperty::Birthdate => a.birthdate.cmp(&b.birthdate),
            SortProperty::Position => a.position.cmp(&b.position),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn keyword(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub property: SortProperty,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sort {
    pub orders: Vec<Order>,
}

impl Sort {
    pub fn unsorted() -> Self {
        Sort::default()
    }

    /// Parses `property[,property...][,asc|desc]`. Blank input means unsorted.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let mut tokens: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();

        let direction = match tokens.last().map(|t| t.to_ascii_lowercase()) {
            Some(last) if last == "asc" => {
                tokens.pop();
                Direction::Asc
            }
            Some(last) if last == "desc" => {
                tokens.pop();
                Direction::Desc
            }
            _ => Direction::Asc,
        };

        if tokens.is_empty() && !raw.trim().is_empty() && raw.contains(|c: char| c.is_alphabetic()) {
            return Err(format!("Sort '{}' names no property", raw));
        }

        let orders = tokens
            .into_iter()
            .map(|name| {
                SortProperty::from_param(name)
                    .map(|property| Order { property, direction })
                    .ok_or_else(|| format!("Unknown sort property '{}'", name))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Sort { orders })
    }

    /// Requested orders followed by `id ASC`, so paging over a fixed filter is stable.
    pub fn with_tiebreaker(&self) -> Vec<Order> {
        let mut orders = self.orders.clone();
        if !orders.iter().any(|o| o.property == SortProperty::Id) {
            orders.push(Order {
                property: SortProperty::Id,
                direction: Direction::Asc,
            });
        }
        orders
    }

    /// `ORDER BY` body built only from whitelisted column names.
    pub fn to_sql(&self) -> String {
        self.with_tiebreaker()
            .iter()
            .map(|o| format!("{} {}", o.property.column(), o.direction.keyword()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn compare(&self, a: &Employee, b: &Employee) -> Ordering {
        for order in self.with_tiebreaker() {
            let ord = order.property.compare(a, b);
            let ord = match order.direction {
                Direction::Asc => ord,
                Direction::Desc => ord.reverse(),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.orders.is_empty() {
            return write!(f, "UNSORTED");
        }
        let parts = self
            .orders
            .iter()
            .map(|o| format!("{}: {}", o.property.column(), o.direction.keyword()))
            .collect::<Vec<_>>();
        write!(f, "{}", parts.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort: Sort,
}

impl PageRequest {
    pub fn new(page: u32, size: u32, sort: Sort) -> Self {
        PageRequest {
            page,
            size: size.max(1),
            sort,
        }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

impl fmt::Display for PageRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page request [number: {}, size {}, sort: {}]", self.page, self.size, self.sort)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u32,
    pub size: u32,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let size = u64::from(request.size.max(1));
        let total_pages = total_elements.div_ceil(size);
        let number = request.page;
        Page {
            number_of_elements: content.len(),
            empty: content.is_empty(),
            content,
            total_elements,
            total_pages,
            number,
            size: request.size,
            first: number == 0,
            last: u64::from(number) + 1 >= total_pages,
        }
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
            number_of_elements: self.number_of_elements,
            first: self.first,
            last: self.last,
            empty: self.empty,
        }
    }
}
