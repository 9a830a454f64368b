// SPDX-License-Identifier: Apache-2.0

use crate::errors::ApiErrorCode;
use crate::params::{DEFAULT_LIMIT, MAX_LIMIT};
use bijux_portfolio_model::{DESCRIPTION_MIN_LEN, TITLE_MIN_LEN, URL_MAX_LEN};
use serde_json::{json, Value};
use std::collections::BTreeSet;

pub const API_TITLE: &str = "Simple Portfolio API";
pub const API_VERSION: &str = "1.0.0";

#[must_use]
pub fn openapi_spec() -> Value {
    let error_codes: Vec<&str> = ApiErrorCode::ALL.iter().map(|c| c.as_str()).collect();
    let error_response = |description: &str| {
        json!({
          "description": description,
          "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ErrorEnvelope"}}}
        })
    };
    json!({
      "openapi": "3.0.3",
      "info": {
        "title": API_TITLE,
        "version": API_VERSION,
        "description": "A simple API to showcase a portfolio of projects."
      },
      "paths": {
        "/": {
          "get": {
            "summary": "Redirect to the front-end",
            "responses": {"302": {"description": "redirect to /static/index.html"}}
          }
        },
        "/healthz": {
          "get": {
            "responses": {"200": {"description": "ok"}}
          }
        },
        "/openapi.json": {
          "get": {
            "responses": {"200": {"description": "this document"}}
          }
        },
        "/portfolio/": {
          "get": {
            "summary": "Get the full portfolio",
            "responses": {
              "200": {
                "description": "portfolio",
                "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Portfolio"}}}
              }
            }
          }
        },
        "/portfolio/projects": {
          "get": {
            "summary": "List projects",
            "parameters": [
              {"name": "skip", "in": "query", "schema": {"type": "integer", "minimum": 0, "default": 0}},
              {"name": "limit", "in": "query", "schema": {"type": "integer", "minimum": 1, "maximum": MAX_LIMIT, "default": DEFAULT_LIMIT}}
            ],
            "responses": {
              "200": {
                "description": "project page",
                "content": {"application/json": {"schema": {"type": "array", "items": {"$ref": "#/components/schemas/Project"}}}}
              },
              "422": error_response("invalid query parameter")
            }
          },
          "post": {
            "summary": "Create a project",
            "requestBody": {
              "required": true,
              "content": {"application/json": {"schema": {"$ref": "#/components/schemas/CreateProjectRequest"}}}
            },
            "responses": {
              "201": {
                "description": "created project",
                "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Project"}}}
              },
              "413": error_response("request body too large"),
              "422": error_response("validation failed")
            }
          }
        },
        "/portfolio/projects/{project_id}": {
          "get": {
            "summary": "Get a project by id",
            "parameters": [
              {"name": "project_id", "in": "path", "required": true, "schema": {"type": "integer", "minimum": 1}}
            ],
            "responses": {
              "200": {
                "description": "project",
                "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Project"}}}
              },
              "404": error_response("project not found"),
              "422": error_response("invalid path parameter")
            }
          }
        },
        "/static/{path}": {
          "get": {
            "parameters": [
              {"name": "path", "in": "path", "required": true, "schema": {"type": "string"}}
            ],
            "responses": {
              "200": {"description": "static asset"},
              "404": error_response("asset not found")
            }
          }
        }
      },
      "components": {
        "schemas": {
          "ApiError": {
            "type": "object",
            "required": ["code", "message", "details", "request_id"],
            "additionalProperties": false,
            "properties": {
              "code": {"$ref": "#/components/schemas/ApiErrorCode"},
              "message": {"type": "string"},
              "details": {"type": "object", "additionalProperties": true},
              "request_id": {"type": "string"}
            }
          },
          "ApiErrorCode": {
            "type": "string",
            "enum": error_codes
          },
          "CreateProjectRequest": {
            "type": "object",
            "required": ["project_data"],
            "properties": {
              "project_data": {"$ref": "#/components/schemas/ProjectCreate"}
            }
          },
          "ErrorEnvelope": {
            "type": "object",
            "required": ["error"],
            "additionalProperties": false,
            "properties": {
              "error": {"$ref": "#/components/schemas/ApiError"}
            },
            "example": {
              "error": {
                "code": "ProjectNotFound",
                "message": "Project with ID 9999 not found",
                "details": {"project_id": 9999},
                "request_id": "req-0000000000000001"
              }
            }
          },
          "FieldViolation": {
            "type": "object",
            "required": ["location", "message", "constraint", "value"],
            "properties": {
              "location": {"type": "array", "items": {"type": "string"}},
              "message": {"type": "string"},
              "constraint": {"type": "string"},
              "value": {}
            }
          },
          "Portfolio": {
            "type": "object",
            "required": ["name", "title", "bio", "projects"],
            "properties": {
              "name": {"type": "string"},
              "title": {"type": "string"},
              "bio": {"type": "string"},
              "projects": {"type": "array", "items": {"$ref": "#/components/schemas/Project"}}
            }
          },
          "Project": {
            "type": "object",
            "required": ["id", "title", "description", "technologies", "url"],
            "properties": {
              "id": {"type": "integer", "minimum": 1},
              "title": {"type": "string", "minLength": TITLE_MIN_LEN},
              "description": {"type": "string", "minLength": DESCRIPTION_MIN_LEN},
              "technologies": {"type": "array", "items": {"type": "string"}},
              "url": {"type": "string", "format": "uri", "maxLength": URL_MAX_LEN, "nullable": true}
            }
          },
          "ProjectCreate": {
            "type": "object",
            "required": ["title", "description", "technologies"],
            "properties": {
              "title": {"type": "string", "minLength": TITLE_MIN_LEN},
              "description": {"type": "string", "minLength": DESCRIPTION_MIN_LEN},
              "technologies": {"type": "array", "items": {"type": "string"}},
              "url": {"type": "string", "format": "uri", "maxLength": URL_MAX_LEN, "nullable": true}
            }
          }
        }
      }
    })
}

fn operations(doc: &Value) -> BTreeSet<String> {
    doc.get("paths")
        .and_then(Value::as_object)
        .into_iter()
        .flatten()
        .flat_map(|(path, item)| {
            item.as_object()
                .into_iter()
                .flat_map(|methods| methods.keys())
                .map(move |method| format!("{} {path}", method.to_ascii_uppercase()))
        })
        .collect()
}

/// Lists how `committed` differs from `current`: operations added or removed
/// first, then a catch-all line when only schemas or wording changed.
#[must_use]
pub fn openapi_drift(committed: &Value, current: &Value) -> Vec<String> {
    let before = operations(committed);
    let after = operations(current);
    let mut drift: Vec<String> = before
        .difference(&after)
        .map(|op| format!("removed operation: {op}"))
        .chain(after.difference(&before).map(|op| format!("added operation: {op}")))
        .collect();
    if drift.is_empty() && committed != current {
        drift.push("document differs outside the operation list".to_string());
    }
    drift
}
