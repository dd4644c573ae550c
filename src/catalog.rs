//! The authored Nano ecosystem catalog.
//!
//! Hand-maintained content, not computed: category order fixes the hub
//! order around the ring, entry order fixes each fan-out. Positions come
//! from the layout engine at startup.

use crate::components::ecosystem_map::{Catalog, Category, ServiceEntry, Shape};

fn category(id: &str, name: &str, color: &str) -> Category {
	Category {
		id: id.into(),
		name: name.into(),
		color: color.into(),
	}
}

fn entry(name: &str, description: &str, url: &str, logo: &str, shape: Shape) -> ServiceEntry {
	ServiceEntry {
		name: name.into(),
		description: description.into(),
		url: url.into(),
		logo: logo.into(),
		shape,
	}
}

/// Build the full catalog. Validated on construction; see [`Catalog::new`].
pub fn nano_catalog() -> Catalog {
	use Shape::{Circle, Rectangle};

	let categories = vec![
		category("wallets", "Wallets", "#ffffff"),
		category("infrastructure", "Infrastructure", "#0079d6"),
		category("community", "Community", "#ffffff"),
		category("payments", "Payments", "#0079d6"),
		category("nanfts", "NaNFTs", "#ffffff"),
		category("gaming", "Gaming", "#0079d6"),
		category("merchants", "Merchants", "#ffffff"),
		category("developer", "Developer Tools", "#0079d6"),
		category("exchanges", "Exchanges", "#ffffff"),
		category("faucets", "Faucets", "#0079d6"),
		category("charity", "Charity", "#ffffff"),
		category("other", "Other", "#0079d6"),
	];

	let services = vec![
		("wallets".into(), vec![
			entry("Natrium", "Mobile wallet", "https://natrium.io", "/logos/natrium.svg", Rectangle),
			entry("Nault", "Web/desktop wallet", "https://nault.cc", "/logos/nault.svg", Rectangle),
			entry("WeNano", "Geo-based wallet", "https://wenano.net", "/logos/wenano.png", Circle),
			entry("Nautilus", "Merchant wallet", "https://nautilus.io", "/logos/nautilus.svg", Rectangle),
			entry("Cake Wallet", "Simple wallet", "https://cakewallet.com", "/logos/cakewallet.png", Rectangle),
			entry("NOW Wallet", "Simple wallet", "https://walletnow.app/", "/logos/nowwallet.svg", Circle),
			entry("Trust Wallet", "Simple wallet", "https://trustwallet.com/", "/logos/trustwallet.svg", Circle),
		]),
		("infrastructure".into(), vec![
			entry("Nano Node", "Reference node implementation", "https://github.com/nanocurrency/nano-node", "/logos/nano.png", Circle),
			entry("Armour Hosting", "Nano Node Hosting", "https://armour-hosting.com", "/logos/armour.png", Circle),
			entry("Nanswap Nodes", "Nano Nodes API", "https://nanswap.com/nodes", "/logos/nanswap.png", Circle),
			entry("NanExplorer", "Nano Network Explorer", "https://nanexplorer.com", "/logos/nanexplorer.png", Rectangle),
			entry("Nano.To", "Nano.To offers free RPC and paid PoW.", "https://nano.to", "/logos/nanoto.png", Rectangle),
		]),
		("community".into(), vec![
			entry("SubNano", "Community blogging site", "https://subnano.me", "/logos/subnano.png", Circle),
			entry("Nano Market", "Escrow-using marketplace", "https://market.nanoriver.io/", "/logos/nanomarket.png", Circle),
			entry("BrainBook", "Pay-to-Read with Nano", "https://www.brainbook.me/", "/logos/brainbook.svg", Circle),
			entry("The Nano Foundation", "Official foundation", "https://nano.org", "/logos/nano.png", Circle),
			entry("r/nanocurrency", "Reddit community", "https://reddit.com/r/nanocurrency", "/logos/reddit.png", Circle),
			entry("Nano Discord", "Discord community", "https://chat.nano.org", "/logos/discord.png", Circle),
		]),
		("payments".into(), vec![
			entry("PayNano", "Payment processor", "https://paynano.me", "/logos/paynanome.svg", Rectangle),
			entry("NOWPayments", "Crypto payment gateway", "https://nowpayments.io", "/logos/nowpayments.svg", Rectangle),
			entry("XNOPay", "Payment processor", "https://xnopay.com", "/logos/xnopay.svg", Rectangle),
			entry("Kappture", "Payment processor", "https://www.kappture.co.uk/", "/logos/kappture.svg", Rectangle),
			entry("NanoPay", "Inspired by Apple Pay, NanoPay.js is an open source, non-custodial browser library for the Nano blockchain.", "https://docs.nano.to/nanopay", "/logos/nanopay.png", Rectangle),
		]),
		("nanfts".into(), vec![
			entry("Raistone OGs", "RaiStone OGs, 50 Rai Stones powered by Nano!", "https://nanswap.com/art/collection/raistones", "/logos/raistoneogs.png", Circle),
			entry("Nano Bots", "Community made robot-based artwork.", "https://nano-bots.xyz", "/logos/nanobots.png", Circle),
			entry("Broccoli Bros", "Broccoli-based art collection", "https://broccolish.xyz/", "/logos/broccolibros.png", Circle),
			entry("Numb Dawgs", "Numb to the charts, wise to the tech. Can't teach an old dawg new tricks. Accumulate.", "https://nanswap.com/art/collection/numbdawgs", "/logos/numbdawgs.png", Circle),
		]),
		("gaming".into(), vec![
			entry("Nanogotchi", "Old school Tamagotchi style game with Nano and NaNFT features", "https://nanogotchi.com/", "/logos/nanogotchi.png", Circle),
			entry("CryptoVision", "Video streaming faucet with nano payouts", "https://cryptovision.live/", "/logos/cryptovision.png", Rectangle),
			entry("XNO Treasure", "Play Nano Treasure Hunt. Free Nano Every Day", "https://xnoxno.com/treasure/", "/logos/xnoxno.png", Rectangle),
			entry("Unreal Nano", "Enjoy a relaxing atmosphere and interact with the magic nano tree, visualizer and more - includes VR support", "https://unreal.nanos.cc/", "/logos/unrealnano.svg", Rectangle),
		]),
		("merchants".into(), vec![
			entry("WeNano Spots", "WeNano is a new way to utilize and experience digital money.", "https://wenano.net", "/logos/wenano.png", Circle),
			entry("Armour Hosting", "Secure, scalable web and server hosting.", "https://armour-hosting.com", "/logos/armour.png", Circle),
			entry("Nano-GPT", "Pay-per-prompt AI Platform", "https://nano-gpt.com", "/logos/nanogpt.png", Circle),
			entry("NanShop", "Buy gift cards with Nano", "https://nanswap.com/shop", "/logos/nanswap.png", Circle),
			entry("Travala", "Book vacations using Nano", "https://travala.com", "/logos/travala.png", Circle),
		]),
		("developer".into(), vec![
			entry("Nano Casa", "nano.casa monitors the open source development of the nano ecosystem", "https://nano.casa", "/logos/nanocasa.png", Rectangle),
			entry("Pippin", "A production-ready, high-performance developer wallet for Nano.", "https://github.com/appditto/pippin_nano_wallet", "/logos/pippin.png", Rectangle),
			entry("KeyTools", "A set of high performance web tools for Nano", "https://tools.nanos.cc/", "/logos/keytools.png", Circle),
			entry("Unreal Engine 4 Plugin", "Unreal Engine 4 Plugin", "https://github.com/wezrule/UE4NanoPlugin", "/logos/ue4.png", Circle),
			entry("Unity Nano Plugin", "Unity Nano Plugin", "https://github.com/wezrule/UnityNanoPlugin", "/logos/unity.png", Rectangle),
			entry("NanoGPT JS", "Interact with NanoGPT's API for pay-per-prompt interaction with AI models", "https://github.com/kilkelly/nanogptjs", "/logos/nanogptjs.png", Circle),
		]),
		("exchanges".into(), vec![
			entry("Binance", "Cryptocurrency exchange", "https://binance.com", "/logos/binance.svg", Circle),
			entry("OKX", "Cryptocurrency exchange", "https://okx.com", "/logos/okx2.svg", Circle),
			entry("Crypto.Com", "Cryptocurrency exchange", "https://crypto.com", "/logos/cryptocom.svg", Circle),
			entry("BitVavo", "Cryptocurrency exchange", "https://bitvavo.com", "/logos/bitvavo.svg", Circle),
			entry("Kraken", "Cryptocurrency exchange", "https://kraken.com", "/logos/kraken-wide.svg", Rectangle),
			entry("KuCoin", "Cryptocurrency exchange", "https://kucoin.com", "/logos/kucoin-wide.svg", Rectangle),
			entry("Gate.io", "Cryptocurrency exchange", "https://www.gate.io/", "/logos/gateio.png", Rectangle),
			entry("HTX", "Cryptocurrency exchange", "https://www.htx.com/", "/logos/htx.png", Circle),
			entry("Nanswap", "Cryptocurrency exchange", "https://nanswap.com?r=Armour", "/logos/nanswap-dark.svg", Rectangle),
		]),
		("faucets".into(), vec![
			entry("NanoDrop", "Free Nano distribution", "https://nanodrop.io", "/logos/nanodrop.png", Circle),
			entry("WeNano Faucet", "Location-based faucet", "https://wenano.net", "/logos/wenano.png", Circle),
			entry("XNOPay Faucet", "Daily Nano rewards", "https://xnopay.com", "/logos/xnopay.svg", Rectangle),
			entry("Nanswap Faucet", "Daily Nano rewards", "https://nanswap.com/nano-faucet", "/logos/nanswap-dark.svg", Rectangle),
			entry("NanoFaucet", "Nano rewards every 45 minutes", "https://nano.lol.my.id/", "/logos/nanofaucet.png", Rectangle),
		]),
		("charity".into(), vec![
			entry("The Humane League", "Animal Cruelty Prevention", "https://thehumaneleague.org/donate-cryptocurrencies", "/logos/thehumaneleague.svg", Circle),
			entry("Crypto For The Homeless", "Humanitarian projects", "https://cryptoforthehomeless.com/", "/logos/cryptoforthehomeless.png", Circle),
			entry("Nim Lang", "Non-profit language support", "https://nim-lang.org/donate.html", "/logos/nim.svg", Rectangle),
			entry("Beer Harris Memorial Trust", "Mental Health support", "https://beerharrismemorialtrust.org/", "/logos/bhmt.png", Rectangle),
			entry("Wolfdog Rescue", "Wolfdog Refuge", "https://www.wolfdogrescue.org/donate-crypto/?v=7885444af42e", "/logos/wolfdog.png", Rectangle),
		]),
		("other".into(), vec![
			entry("Nano Charts", "Community resources", "https://nanocharts.info", "/logos/nanocharts.png", Rectangle),
			entry("KarmaCall", "Get paid in Nano to block spam calls", "https://www.karmacall.com/", "/logos/karmacall.webp", Circle),
			entry("CoinGecko", "CoinGecko", "https://www.coingecko.com/en/coins/nano", "/logos/coingecko.png", Circle),
			entry("CoinMarketCap", "CoinMarketCap", "https://coinmarketcap.com/currencies/nano/", "/logos/coinmarketcap.png", Circle),
			entry("XNO Xperience", "Compare a transaction across different cryptocurrencies and payment processors.", "https://xnoxno.com/xperience/", "/logos/xnoxno.png", Rectangle),
			entry("TipNano", "Android app that allows earning payouts in nano by performing tasks such as playing games", "https://play.google.com/store/apps/details?id=com.bdf.tipnano", "/logos/tipnano.png", Circle),
		]),
	];

	Catalog::new(categories, services)
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn catalog_is_fully_referenced() {
		let catalog = nano_catalog();
		assert_eq!(catalog.categories.len(), 12);
		// no list was dropped by validation
		let per_category: usize = catalog
			.categories
			.iter()
			.map(|c| catalog.services_for(&c.id).len())
			.sum();
		assert_eq!(per_category, catalog.total_service_count());
		assert!(catalog.total_service_count() > 0);
	}

	#[test]
	fn category_ids_are_unique() {
		let catalog = nano_catalog();
		let ids: HashSet<&str> = catalog.categories.iter().map(|c| c.id.as_str()).collect();
		assert_eq!(ids.len(), catalog.categories.len());
	}

	#[test]
	fn every_entry_has_a_target_url() {
		let catalog = nano_catalog();
		for c in &catalog.categories {
			for e in catalog.services_for(&c.id) {
				assert!(e.url.starts_with("https://"), "{} has no https url", e.name);
				assert!(!e.logo.is_empty());
			}
		}
	}
}
