use serde::Deserialize;

// { properties: [prop] } / { property: prop }
//
// prop
//  ├── _id | id        (string or number)
//  ├── title
//  ├── city
//  ├── category
//  ├── location
//  ├── price           (number or "Price on Request")
//  ├── attributes
//  │    ├── square
//  │    ├── bedroom
//  │    └── bathroom
//  ├── createdAt
//  ├── description
//  └── images

// Records stay raw so one mistyped record can be skipped on its own
#[derive(Debug, Deserialize)]
pub struct ListingEnvelope {
    #[serde(default)]
    pub properties: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct DetailEnvelope {
    pub property: ApiProperty,
}

#[derive(Debug, Deserialize)]
pub struct ApiProperty {
    // Mongo-backed APIs may send both keys
    #[serde(rename = "_id")]
    pub mongo_id: Option<serde_json::Value>,
    pub id: Option<serde_json::Value>,
    pub title: Option<String>,
    pub city: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,

    // Number or the "Price on Request" sentinel
    pub price: Option<serde_json::Value>,

    pub attributes: Option<ApiAttributes>,

    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct ApiAttributes {
    pub square: Option<serde_json::Value>,
    pub bedroom: Option<serde_json::Value>,
    pub bathroom: Option<serde_json::Value>,
}
