//! Guide model matching the backend guide documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Repair category for a guide.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    Electronics,
    Furniture,
    Automotive,
    Plumbing,
    Electrical,
    Appliances,
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 7] = [
        Category::Electronics,
        Category::Furniture,
        Category::Automotive,
        Category::Plumbing,
        Category::Electrical,
        Category::Appliances,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Furniture => "Furniture",
            Category::Automotive => "Automotive",
            Category::Plumbing => "Plumbing",
            Category::Electrical => "Electrical",
            Category::Appliances => "Appliances",
            Category::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Electronics" => Some(Category::Electronics),
            "Furniture" => Some(Category::Furniture),
            "Automotive" => Some(Category::Automotive),
            "Plumbing" => Some(Category::Plumbing),
            "Electrical" => Some(Category::Electrical),
            "Appliances" => Some(Category::Appliances),
            "Other" => Some(Category::Other),
            _ => None,
        }
    }
}

/// Difficulty rating for a guide.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// All difficulty levels in ascending order.
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Beginner" => Some(Difficulty::Beginner),
            "Intermediate" => Some(Difficulty::Intermediate),
            "Advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }
}

/// A material required by a guide, with a free-form quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Material {
    pub name: String,
    pub quantity: String,
}

/// A single step in a guide.
///
/// Step numbers are 1-based and contiguous; [`GuideDraft`] renumbers after
/// every step-list mutation so the invariant holds at all times.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GuideStep {
    pub step_number: u32,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Denormalized author snapshot embedded in a guide at fetch time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuideAuthor {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// One entry in a guide's `likes` sequence.
///
/// The backend returns either bare id strings or populated `{id}` records
/// depending on the query path; both forms are accepted and compared through
/// [`Liker::id`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Liker {
    Embedded(LikerRecord),
    Raw(String),
}

/// Populated liker record form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LikerRecord {
    #[serde(alias = "_id")]
    pub id: String,
}

impl Liker {
    /// Normalized liker identifier, regardless of wire form.
    pub fn id(&self) -> &str {
        match self {
            Liker::Embedded(record) => &record.id,
            Liker::Raw(id) => id,
        }
    }
}

/// A user-authored repair guide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Guide {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub difficulty: Difficulty,
    /// Estimated completion time in minutes
    pub estimated_time: u32,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub materials: Vec<Material>,
    pub steps: Vec<GuideStep>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Image URLs; the first entry is the cover image
    #[serde(default)]
    pub images: Vec<String>,
    pub author: GuideAuthor,
    #[serde(default)]
    pub likes: Vec<Liker>,
    /// Server-maintained view counter, read-only on the client
    #[serde(default)]
    pub views: u64,
    pub created_at: DateTime<Utc>,
}

impl Guide {
    /// Whether the given user appears in the likes sequence.
    pub fn liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|liker| liker.id() == user_id)
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    /// Primary/cover image URL, if any.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Apply a confirmed like-toggle outcome for the given user: the id
    /// appears exactly once when liked, not at all when unliked.
    pub(crate) fn apply_like_state(&mut self, user_id: &str, has_liked: bool) {
        self.likes.retain(|liker| liker.id() != user_id);
        if has_liked {
            self.likes.push(Liker::Raw(user_id.to_string()));
        }
    }
}

/// Author-editable guide payload for create and update calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GuideDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub estimated_time: u32,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub materials: Vec<Material>,
    pub steps: Vec<GuideStep>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl GuideDraft {
    /// Start a new draft with a single blank step.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        difficulty: Difficulty,
        estimated_time: u32,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category,
            difficulty,
            estimated_time,
            tools: Vec::new(),
            materials: Vec::new(),
            steps: vec![GuideStep {
                step_number: 1,
                title: String::new(),
                description: String::new(),
                image: None,
                warnings: Vec::new(),
            }],
            tags: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Append a step at the end of the sequence.
    pub fn add_step(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.steps.push(GuideStep {
            step_number: self.steps.len() as u32 + 1,
            title: title.into(),
            description: description.into(),
            image: None,
            warnings: Vec::new(),
        });
    }

    /// Remove the step at `index`. Returns false (and leaves the draft
    /// unchanged) when the index is out of range or only one step remains.
    pub fn remove_step(&mut self, index: usize) -> bool {
        if self.steps.len() <= 1 || index >= self.steps.len() {
            return false;
        }
        self.steps.remove(index);
        self.renumber_steps();
        true
    }

    /// Move the step at `from` to position `to`. Returns false when either
    /// index is out of range.
    pub fn move_step(&mut self, from: usize, to: usize) -> bool {
        if from >= self.steps.len() || to >= self.steps.len() {
            return false;
        }
        let step = self.steps.remove(from);
        self.steps.insert(to, step);
        self.renumber_steps();
        true
    }

    fn renumber_steps(&mut self) {
        for (i, step) in self.steps.iter_mut().enumerate() {
            step.step_number = i as u32 + 1;
        }
    }

    /// Validate required fields before submission.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".to_string());
        }
        if self.description.trim().is_empty() {
            return Err("Description is required".to_string());
        }
        if self.estimated_time == 0 {
            return Err("Estimated time must be positive".to_string());
        }
        if self.steps.is_empty() {
            return Err("At least one step is required".to_string());
        }
        Ok(())
    }
}

/// Response envelope for the guide list endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideListResponse {
    pub guides: Vec<Guide>,
    pub total_pages: u32,
    pub current_page: u32,
    pub total: u64,
}

/// Response for the like-toggle endpoint. The backend is authoritative on
/// the resulting state.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub has_liked: bool,
}
