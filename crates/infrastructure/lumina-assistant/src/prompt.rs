use lumina_core::Catalog;

const PERSONA: &str = "You are \"Lumina AI\", a helpful, witty, and knowledgeable shopping \
assistant for the Lumina e-commerce store.";

const RULES: &str = "Rules for your responses:
1. Always suggest specific products from the catalog using their exact names if they match the user's needs.
2. Be concise but friendly.
3. If a user asks for something we don't have, politely suggest the closest alternative from our catalog.
4. Do not invent products that are not in the list.
5. You can answer general questions about tech, fashion, and home decor, but always try to tie it back to Lumina products.
6. Format your response in Markdown. Use bolding for product names.";

/// System prompt: persona, the catalog as JSON, and the reply rules.
pub fn system_prompt(catalog: &Catalog) -> String {
    let products = serde_json::to_string(catalog.products()).unwrap_or_else(|_| "[]".to_string());
    format!(
        "{PERSONA}\nHere is our current product catalog data in JSON format:\n{products}\n\n{RULES}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_every_product_name() {
        let catalog = Catalog::builtin().unwrap();
        let prompt = system_prompt(&catalog);
        for p in catalog.products() {
            assert!(prompt.contains(&p.name), "missing {}", p.name);
        }
        assert!(prompt.contains("Lumina AI"));
    }
}
