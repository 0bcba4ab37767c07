// src/export/model.rs
// =============================================================================
// The data structures of a LibGuides XML export.
//
// The export is a tree:
//
//   libguides
//   ├── customer, site
//   ├── accounts, groups, subjects, tags, vendors
//   └── guides
//       └── guide ── owner, group, subjects, tags
//           └── pages
//               └── page
//                   └── boxes
//                       └── box ── assets
//                           └── panes
//                               └── pane ── assets
//
// Every struct derives Deserialize (reading the XML) and Serialize (writing
// JSON). Field names are the XML element names, so the JSON keys match the
// export one to one.
// =============================================================================

use serde::{Deserialize, Serialize};

use super::decode::{lenient_int, wrapped_list};

wrapped_list!(account_list, Account, "account");
wrapped_list!(group_list, Group, "group");
wrapped_list!(subject_list, Subject, "subject");
wrapped_list!(tag_list, Tag, "tag");
wrapped_list!(vendor_list, Vendor, "vendor");
wrapped_list!(guide_list, Guide, "guide");
wrapped_list!(page_list, Page, "page");
wrapped_list!(box_list, GuideBox, "box");
wrapped_list!(pane_list, Pane, "pane");
wrapped_list!(asset_list, Asset, "asset");

/// The institution that owns the LibGuides instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    #[serde(deserialize_with = "lenient_int")]
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub url: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub time_zone: String,
    pub created: String,
    pub updated: String,
}

/// The LibGuides site; its domain is the base of every back-link we build
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Site {
    #[serde(deserialize_with = "lenient_int")]
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub domain: String,
    pub admin: String,
    pub created: String,
    pub updated: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    #[serde(deserialize_with = "lenient_int")]
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub nickname: String,
    pub signature: String,
    pub image: String,
    pub address: String,
    pub phone: String,
    pub skype: String,
    pub website: String,
    pub created: String,
    pub updated: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    #[serde(deserialize_with = "lenient_int")]
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub url: String,
    pub description: String,
    pub password: String,
    pub created: String,
    pub updated: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subject {
    #[serde(deserialize_with = "lenient_int")]
    pub id: i64,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(deserialize_with = "lenient_int")]
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vendor {
    #[serde(deserialize_with = "lenient_int")]
    pub id: i64,
    pub name: String,
}

/// The account that owns a guide or an asset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Owner {
    #[serde(deserialize_with = "lenient_int")]
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub image: String,
}

/// A single piece of content inside a box (link, database, book, rich text...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Asset {
    #[serde(deserialize_with = "lenient_int")]
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// HTML, possibly double encoded by the export tool
    pub description: String,
    pub url: String,
    pub owner: Owner,
    pub map_id: String,
    #[serde(deserialize_with = "lenient_int")]
    pub position: i64,
    pub created: String,
    pub updated: String,
}

/// A tab inside a tabbed box
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pane {
    #[serde(deserialize_with = "asset_list")]
    pub assets: Vec<Asset>,
}

/// A content box on a page
///
/// Named GuideBox so it doesn't shadow std's Box.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideBox {
    #[serde(deserialize_with = "lenient_int")]
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub map_id: String,
    #[serde(deserialize_with = "lenient_int")]
    pub column: i64,
    #[serde(deserialize_with = "lenient_int")]
    pub position: i64,
    /// 0 = visible, anything else = hidden
    #[serde(deserialize_with = "lenient_int")]
    pub hidden: i64,
    pub created: String,
    pub updated: String,
    #[serde(deserialize_with = "asset_list")]
    pub assets: Vec<Asset>,
    #[serde(deserialize_with = "pane_list", skip_serializing_if = "Vec::is_empty")]
    pub panes: Vec<Pane>,
}

impl GuideBox {
    pub fn is_hidden(&self) -> bool {
        self.hidden != 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    #[serde(deserialize_with = "lenient_int")]
    pub id: i64,
    pub name: String,
    pub description: String,
    pub url: String,
    pub redirect: String,
    #[serde(deserialize_with = "lenient_int")]
    pub source_page_id: i64,
    #[serde(deserialize_with = "lenient_int")]
    pub parent_page_id: i64,
    #[serde(deserialize_with = "lenient_int")]
    pub position: i64,
    /// 0 = visible, anything else = hidden
    #[serde(deserialize_with = "lenient_int")]
    pub hidden: i64,
    pub created: String,
    pub updated: String,
    pub modified: String,
    #[serde(deserialize_with = "box_list")]
    pub boxes: Vec<GuideBox>,
}

impl Page {
    pub fn is_hidden(&self) -> bool {
        self.hidden != 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Guide {
    #[serde(deserialize_with = "lenient_int")]
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub owner: Owner,
    pub group: Group,
    pub redirect: String,
    pub status: String,
    pub created: String,
    pub updated: String,
    pub modified: String,
    pub published: String,
    #[serde(deserialize_with = "subject_list")]
    pub subjects: Vec<Subject>,
    #[serde(deserialize_with = "tag_list")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "page_list")]
    pub pages: Vec<Page>,
}

/// The whole export, as decoded from the XML root element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub customer: Option<Customer>,
    pub site: Option<Site>,
    #[serde(deserialize_with = "account_list")]
    pub accounts: Vec<Account>,
    #[serde(deserialize_with = "group_list")]
    pub groups: Vec<Group>,
    #[serde(deserialize_with = "subject_list")]
    pub subjects: Vec<Subject>,
    #[serde(deserialize_with = "tag_list")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "vendor_list")]
    pub vendors: Vec<Vendor>,
    #[serde(deserialize_with = "guide_list")]
    pub guides: Vec<Guide>,
}
