//! Command argument structures and their handlers.
//!
//! Argument structs carry clap derives and convert into core types at the
//! boundary, so `recipe-core` stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Types → RecipeBuilder / RecipeListing
//! ```
//!
//! The `create` and `edit` commands drive one [`RecipeBuilder`] session from
//! start to finish: fill in each step in order, then optionally save a draft
//! and submit.

use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use log::debug;
use recipe_core::{
    display::{DraftSaved, RecipeList, SessionStatusView, Submitted, WizardView},
    listing::{known_tag, ALL_TAGS},
    DraftStore, IngredientField, MockBackend, RecipeBuilder, RecipeListing, SessionStatus,
    Settings, Theme,
};

use crate::renderer::TerminalRenderer;

/// Color theme choices for `--theme`
#[derive(Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(val: ThemeArg) -> Self {
        match val {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

/// List recipes
///
/// Shows the built-in recipes followed by submitted ones. A recipe is shown
/// when its title contains the search text and it carries any of the given
/// tags.
#[derive(Args, Default)]
pub struct ListArgs {
    /// Case-insensitive title search
    #[arg(short, long)]
    pub search: Option<String>,
    /// Only show recipes with this tag (repeatable; any tag matches)
    #[arg(short, long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,
}

/// Draft operations
#[derive(Subcommand)]
pub enum DraftCommands {
    /// Show the saved draft
    Show,
    /// Discard the saved draft and end the draft session
    Clear,
}

/// An ingredient given as `NAME:QTY[:UNIT]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientArg {
    pub name: String,
    pub quantity: String,
    pub unit: Option<String>,
}

impl FromStr for IngredientArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let name = parts.next().unwrap_or_default().trim();
        let Some(quantity) = parts.next() else {
            return Err(format!("Expected NAME:QTY[:UNIT], got '{s}'"));
        };
        if name.is_empty() {
            return Err(format!("Ingredient name is missing in '{s}'"));
        }
        Ok(Self {
            name: name.to_string(),
            quantity: quantity.trim().to_string(),
            unit: parts.next().map(|unit| unit.trim().to_string()),
        })
    }
}

/// Recipe contents and what to do with them
#[derive(Args)]
pub struct RecipeArgs {
    /// Recipe title (at least 4 characters)
    #[arg(long)]
    pub title: Option<String>,
    /// Short description
    #[arg(long)]
    pub description: Option<String>,
    /// Total calories
    #[arg(long)]
    pub calories: Option<String>,
    /// Ingredient as NAME:QTY[:UNIT] (repeatable, replaces existing rows)
    #[arg(long = "ingredient", value_name = "NAME:QTY:UNIT")]
    pub ingredients: Vec<IngredientArg>,
    /// Instruction step (repeatable, in order)
    #[arg(long = "step", value_name = "TEXT")]
    pub steps: Vec<String>,
    /// Start from the saved draft
    #[arg(long)]
    pub load_draft: bool,
    /// Save the result as the draft
    #[arg(long)]
    pub save_draft: bool,
    /// Submit the recipe
    #[arg(long)]
    pub submit: bool,
}

/// Edit an existing recipe
#[derive(Args)]
pub struct EditArgs {
    /// ID of the recipe to edit
    pub id: String,
    #[command(flatten)]
    pub recipe: RecipeArgs,
}

/// Runs commands against one store and renders their output.
pub struct Cli {
    store: DraftStore,
    settings: Settings,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: DraftStore, settings: Settings, renderer: TerminalRenderer) -> Self {
        Self {
            store,
            settings,
            renderer,
        }
    }

    pub async fn list(&self, args: ListArgs) -> Result<()> {
        let mut listing = RecipeListing::new();
        listing
            .fetch(&self.store, self.settings.timings.listing_latency)
            .await
            .context("Failed to load recipes")?;
        listing.sync_with_session_status(&self.store)?;

        if let Some(query) = &args.search {
            listing.set_search(query);
        }
        for name in &args.tags {
            let Some(tag) = known_tag(name) else {
                bail!(
                    "Unknown tag '{name}'. Known tags: {}",
                    ALL_TAGS.join(", ")
                );
            };
            listing.toggle_tag(tag);
        }

        let mut output = String::from("# Recipes\n\n");
        if listing.is_create_disabled() {
            output.push_str("> Creating recipes is disabled while a draft is open.\n\n");
        }
        output.push_str(&RecipeList(listing.displayed()).to_string());
        self.renderer.render(&output)
    }

    pub fn status(&self) -> Result<()> {
        let draft = self.store.detect_draft();
        let view = SessionStatusView {
            status: self.store.session_status()?,
            draft: draft.as_ref(),
        };
        self.renderer.render(&view.to_string())
    }

    pub fn handle_draft_command(&self, command: DraftCommands) -> Result<()> {
        match command {
            DraftCommands::Show => match self.store.detect_draft() {
                Some(record) => self.renderer.render(&record.to_string()),
                None => self.renderer.render("No draft saved.\n"),
            },
            DraftCommands::Clear => {
                self.store.clear_draft()?;
                self.store.clear_session_status()?;
                self.renderer.render("Draft cleared.\n")
            }
        }
    }

    /// Start a new recipe. While a draft session is open only `--load-draft`
    /// may continue it.
    pub async fn create(&self, args: RecipeArgs) -> Result<()> {
        if self.store.session_status()? == Some(SessionStatus::Drafting) && !args.load_draft {
            bail!(
                "Creating recipes is disabled while a draft is open. \
                 Continue it with --load-draft or discard it with 'rb draft clear'"
            );
        }
        let builder = RecipeBuilder::open(self.store.connect_tab()?, &self.settings);
        self.run_form(builder, args).await
    }

    pub async fn edit(&self, args: EditArgs) -> Result<()> {
        let (mut builder, pending) =
            RecipeBuilder::open_for_edit(self.store.connect_tab()?, &self.settings, &args.id);
        builder
            .load_recipe(&self.backend()?, pending)
            .await
            .with_context(|| format!("Failed to load recipe '{}'", args.id))?;
        self.run_form(builder, args.recipe).await
    }

    async fn run_form(&self, mut builder: RecipeBuilder, args: RecipeArgs) -> Result<()> {
        if args.load_draft && !builder.load_draft()? {
            bail!("There is no saved draft to load");
        }

        self.fill_details(&mut builder, &args).await?;
        builder.advance()?;
        fill_ingredients(&mut builder, &args.ingredients)?;
        builder.advance()?;
        fill_instructions(&mut builder, &args.steps)?;

        if args.save_draft {
            let record = builder.save_draft()?;
            self.renderer.render(&DraftSaved(&record).to_string())?;
        }

        if args.submit {
            let had_draft = self.store.detect_draft().is_some();
            builder.submit(&self.backend()?).await?;
            let submitted = Submitted {
                data: builder.data(),
                draft_cleared: had_draft && self.store.detect_draft().is_none(),
            };
            return self.renderer.render(&submitted.to_string());
        }

        self.renderer.render(&WizardView(&builder).to_string())
    }

    async fn fill_details(&self, builder: &mut RecipeBuilder, args: &RecipeArgs) -> Result<()> {
        if let Some(title) = &args.title {
            builder.set_title(title)?;
        }
        if let Some(description) = &args.description {
            builder.set_description(description)?;
        }
        if let Some(calories) = &args.calories {
            builder.set_calories(calories)?;
        }

        let Some(details) = builder.details() else {
            return Ok(());
        };
        details.title_settled().await;
        if let Some(error) = builder.details().and_then(|details| details.title_error()) {
            self.renderer.render(&format!("**Title:** {error}\n"))?;
        }
        Ok(())
    }

    fn backend(&self) -> Result<MockBackend> {
        Ok(MockBackend::new(&self.settings.timings).with_store(self.store.connect_tab()?))
    }
}

/// Fill rows from `ingredients`, dropping any rows beyond them.
fn fill_ingredients(builder: &mut RecipeBuilder, ingredients: &[IngredientArg]) -> Result<()> {
    if ingredients.is_empty() {
        return Ok(());
    }
    for (index, ingredient) in ingredients.iter().enumerate() {
        if index >= row_count(builder) {
            builder.add_ingredient()?;
        }
        builder.update_ingredient(index, IngredientField::Name, &ingredient.name)?;
        builder.update_ingredient(index, IngredientField::Quantity, &ingredient.quantity)?;
        if let Some(unit) = &ingredient.unit {
            builder.update_ingredient(index, IngredientField::Unit, unit)?;
        }
    }
    while row_count(builder) > ingredients.len() {
        builder.remove_ingredient(row_count(builder) - 1)?;
    }
    debug!("Filled {} ingredient rows", ingredients.len());
    Ok(())
}

fn row_count(builder: &RecipeBuilder) -> usize {
    builder.ingredients().map_or(0, |editor| editor.len())
}

fn fill_instructions(builder: &mut RecipeBuilder, steps: &[String]) -> Result<()> {
    for (index, text) in steps.iter().enumerate() {
        let existing = builder
            .instructions()
            .map_or(0, |editor| editor.steps().len());
        if index >= existing {
            builder.add_instruction()?;
        }
        builder.edit_instruction(index, text)?;
    }
    Ok(())
}
