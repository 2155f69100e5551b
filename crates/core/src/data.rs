//! Built-in content datasets, keyed by category.

pub type Dataset = &'static [(&'static str, &'static [&'static str])];

pub const JOKES: Dataset = &[
    (
        "fat",
        &[
            "Yo mama is so fat, when she skips a meal the stock market drops.",
            "Yo mama is so fat, she needs cheat codes for Wii Fit.",
            "Yo mama is so fat, her phone's map app shows her as a landmark.",
            "Yo mama is so fat, when she sat on a rainbow, Skittles popped out.",
        ],
    ),
    (
        "stupid",
        &[
            "Yo mama is so stupid, she stared at a cup of orange juice for an hour because it said concentrate.",
            "Yo mama is so stupid, she put a ruler on her pillow to see how long she slept.",
            "Yo mama is so stupid, she tried to climb Mountain Dew.",
        ],
    ),
    (
        "ugly",
        &[
            "Yo mama is so ugly, she made an onion cry.",
            "Yo mama is so ugly, when she looks in the mirror, her reflection ducks.",
            "Yo mama is so ugly, she threw a boomerang and it refused to come back.",
        ],
    ),
    (
        "old",
        &[
            "Yo mama is so old, her birth certificate says expired.",
            "Yo mama is so old, she knew Burger King while he was still a prince.",
            "Yo mama is so old, her social security number is one.",
        ],
    ),
    (
        "poor",
        &[
            "Yo mama is so poor, she waves around a popsicle stick and calls it air conditioning.",
            "Yo mama is so poor, the ducks throw bread at her.",
            "Yo mama is so poor, she can't even afford to pay attention.",
        ],
    ),
    (
        "short",
        &[
            "Yo mama is so short, she does backflips under the bed.",
            "Yo mama is so short, she has to use a ladder to pick up a dime.",
            "Yo mama is so short, she can sit on a curb and swing her legs.",
        ],
    ),
    (
        "skinny",
        &[
            "Yo mama is so skinny, she hula hoops with a Cheerio.",
            "Yo mama is so skinny, she uses a Band-Aid as a maxi dress.",
            "Yo mama is so skinny, she has to run around in the shower to get wet.",
        ],
    ),
    (
        "smells",
        &[
            "Yo mama smells so bad, even the skunks moved out of the neighborhood.",
            "Yo mama smells so bad, her deodorant filed for a restraining order.",
            "Yo mama smells so bad, the flies hold their noses.",
        ],
    ),
    (
        "bald",
        &[
            "Yo mama is so bald, you can see what she's thinking.",
            "Yo mama is so bald, she takes a shower and washes her face all the way back.",
            "Yo mama is so bald, when she goes outside the sun gets a tan.",
        ],
    ),
];

pub const RECIPES: Dataset = &[
    (
        "breakfast",
        &[
            "Overnight oats. Stir half a cup of rolled oats with half a cup of milk and a spoon of honey, refrigerate overnight, and top with berries in the morning.",
            "Scrambled eggs. Whisk two eggs with a pinch of salt, cook over low heat in butter while stirring gently, and take them off the heat while still glossy.",
        ],
    ),
    (
        "lunch",
        &[
            "Caprese sandwich. Layer sliced mozzarella, tomato and basil on ciabatta, drizzle with olive oil, and season with salt and pepper.",
            "Chickpea salad. Toss a can of rinsed chickpeas with diced cucumber, red onion, parsley, lemon juice and olive oil.",
        ],
    ),
    (
        "dinner",
        &[
            "Garlic butter pasta. Cook spaghetti, then toss it with butter, sauteed garlic, parmesan and a splash of the pasta water.",
            "Sheet pan chicken. Roast chicken thighs with chopped potatoes, olive oil, paprika and salt at 220 degrees Celsius for thirty five minutes.",
        ],
    ),
    (
        "dessert",
        &[
            "Mug brownie. Mix four tablespoons each of flour and sugar, two of cocoa, three of milk and two of oil in a mug, then microwave for seventy seconds.",
            "Baked apples. Core two apples, fill them with oats, cinnamon and brown sugar, and bake for thirty minutes.",
        ],
    ),
    (
        "snack",
        &[
            "Spiced popcorn. Toss freshly popped popcorn with melted butter, smoked paprika and a pinch of salt.",
            "Ants on a log. Fill celery sticks with peanut butter and top with raisins.",
        ],
    ),
];
