//! Filters accepted by the list operations
//!
//! Every field is optional. Unset fields are left out of the query string, so
//! the remote applies its own defaults (`limit` 25, `offset` 0).

use crate::types::QueryParams;

/// Plain pagination, used by list operations without other filters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl PageParams {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }

    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        QueryParams::new()
            .push("limit", self.limit)
            .push("offset", self.offset)
            .into_vec()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBranchesParams {
    /// Filter by branch name
    pub name: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ListBranchesParams {
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        QueryParams::new()
            .push("name", self.name.as_deref())
            .push("limit", self.limit)
            .push("offset", self.offset)
            .into_vec()
    }
}

/// Filters shared by directory and file listings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTreeParams {
    pub branch_id: Option<u64>,
    pub directory_id: Option<u64>,
    /// Filter by name
    pub filter: Option<String>,
    /// Include all descendants instead of direct children only
    pub recursion: bool,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

pub type ListDirectoriesParams = ListTreeParams;
pub type ListFilesParams = ListTreeParams;

impl ListTreeParams {
    pub fn in_branch(branch_id: u64) -> Self {
        Self {
            branch_id: Some(branch_id),
            ..Default::default()
        }
    }

    pub fn in_directory(directory_id: u64) -> Self {
        Self {
            directory_id: Some(directory_id),
            ..Default::default()
        }
    }

    pub fn recursive(mut self) -> Self {
        self.recursion = true;
        self
    }

    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        QueryParams::new()
            .push("branchId", self.branch_id)
            .push("directoryId", self.directory_id)
            .push("filter", self.filter.as_deref())
            .flag("recursion", self.recursion)
            .push("limit", self.limit)
            .push("offset", self.offset)
            .into_vec()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListReviewedBuildsParams {
    pub branch_id: Option<u64>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ListReviewedBuildsParams {
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        QueryParams::new()
            .push("branchId", self.branch_id)
            .push("limit", self.limit)
            .push("offset", self.offset)
            .into_vec()
    }
}
