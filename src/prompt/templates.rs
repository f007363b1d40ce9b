//! Built-in instruction templates
//!
//! The structural rules these carry (entity-only diagrams, the
//! caption/explanation response shape, the use-case specification table) are
//! hard constraints communicated to the model. They are data: edit the
//! wording here without touching the pipelines.

use super::PromptTemplate;

/// Whole-tree relationship diagram (Mermaid classDiagram)
pub fn diagram() -> PromptTemplate {
    PromptTemplate::new(
        "You are an expert in software architecture and database modeling. Your task is to \
         analyze TypeScript code and a Prisma schema to generate a class diagram that focuses \
         primarily on relationships between entities.",
        r#"Analyze the following TypeScript code and Prisma schema, then generate a class diagram focusing on relationships:

TypeScript Code:
{typescript_content}

Prisma Schema:
{prisma_schema}

Follow these strict guidelines:
1. Identify all entities (classes, interfaces, and models) from both the TypeScript code and Prisma schema.
2. For each entity, include ONLY the name. DO NOT include attributes or methods unless they are crucial for understanding a relationship.
3. Focus EXCLUSIVELY on representing relationships between entities:
   - One-to-One: Use --> with "1" on both ends
   - One-to-Many: Use --> with "1" on one end and "*" on the other
   - Many-to-Many: Use --> with "*" on both ends
   - Inheritance: Use <|--
   - Implementation: Use <|..
4. Use "classDiagram" to start the Mermaid class diagram.
5. Represent entities with the syntax: class EntityName
6. Represent relationships with the correct arrows and cardinality, e.g.:
   EntityA "1" --> "*" EntityB : has many
7. Include enum types ONLY if they are directly involved in a relationship. Otherwise, omit them.
8. Organize the diagram for maximum readability, grouping related entities together.
9. If there are many entities, focus on the most important ones and their relationships.
10. DO NOT include any attributes in the diagram unless they are absolutely crucial for understanding a relationship.

Output ONLY the Mermaid code for the diagram, without any additional explanation or markdown formatting. The diagram should ONLY show relationships between entities, not their internal structure."#,
    )
}

/// Per-file explanation with caption (fixed two-paragraph response shape)
pub fn explanation() -> PromptTemplate {
    PromptTemplate::new(
        "You are an expert in TypeScript and software development. Your task is to provide a \
         brief explanation of the given TypeScript code and a short caption.",
        r#"Analyze the following TypeScript code and provide:
1. A brief explanation (40-60 words) of its purpose and functionality
2. A short caption (10 words or less) summarizing the code's main function

File Name: {file_name}

Code Content:
{file_content}

Format your response as follows:
Caption: [Your 10-word or less caption here]

[Your 40-60 word explanation here]

Ensure the explanation is informative yet brief, suitable for a quick overview of the file's contents."#,
    )
}

/// Use-case specifications from a controller/schema analysis summary
pub fn use_case() -> PromptTemplate {
    PromptTemplate::new(
        "You are an expert business analyst producing use case specifications from source code \
         analysis.",
        r#"Based on the following analysis of a controller component, generate detailed use case specifications for the operations identified:

{analysis}

For each operation identified in the analysis, create a comprehensive use case specification using the following structure:

# Use Case Specifications

## [Operation Name]
| Section | Description |
|---------|-------------|
| Use Case Name | [Clear, action-oriented name for the operation] |
| Description | [Brief description of the operation, its purpose, and context] |
| Actors | Primary Actor: End User<br>Secondary Actor(s): System |
| Preconditions | [Conditions that must be true before the operation can be performed] |
| Postconditions | [System state after the operation has been successfully completed] |
| Standard Process | [Numbered steps describing the main success scenario] |
| Alternative Processes | [Alternative paths, numbered as subsets of the main process steps, e.g., 2a for an alternative to step 2] |
| Exception Processes | [Error handling processes such as validation errors, numbered as subsets of the main process steps, e.g., 3a for an exception in step 3] |

Important guidelines:
1. Always set the primary actor as "End User" and the secondary actor as "System" for all operations.
2. For CRUD operations (create, getById, update, delete), follow common patterns but adapt to the specific implementation in the controller.
3. Pay special attention to operations like search, getPaginated, and getFeatured, which may have unique parameters and behaviors.
4. Consider authentication and authorization requirements, especially for operations that check for a logged-in user.
5. Include details about input validation, especially when request bodies are parsed against schemas.
6. For operations that interact with services, describe the general purpose without diving into implementation details.
7. When describing processes involving database operations, use generic terms like "database" instead of specific technologies.
8. For search operations, detail the various search criteria and how they affect the results.
9. For operations returning paginated results, include information about pagination in the process and postconditions.
10. Write all components considering the interaction between the end user and the system, focusing on what the user does and how the system responds.
11. If there are similar operations across multiple controllers, combine them into a single use case specification with clear distinctions between the controllers.

Common considerations for different types of operations:
- CRUD Operations:
  - Create: Data validation, handling of user-provided data, status setting (e.g., 'pending')
  - Read: Retrieving associated data, handling public vs. private access
  - Update: Partial updates, handling of sensitive fields, potential follow-up processing
  - Delete: Ensuring user authorization, handling of associated data
- Search Operations: Handling of multiple search criteria, pagination, potential security considerations for visibility
- List Operations (e.g., getPaginated, getByUser): Pagination, filtering, handling of user-specific data
- Featured Content: Criteria for featuring, limit handling

Remember to adapt the content of each operation based on the provided analysis, considering the controller methods and their specific implementations, while maintaining the end user as the primary actor initiating the actions. Generate a separate use case specification for each distinct operation identified in the analysis."#,
    )
}
